//! # aisle-db: Database Layer for Aisle POS
//!
//! This crate provides database access for the Aisle POS system.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Aisle POS Data Flow                        │
//! │                                                                 │
//! │  RegisterService / AnalyticsService                             │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                   aisle-db (THIS CRATE)                   │ │
//! │  │                                                           │ │
//! │  │  ┌─────────────┐   ┌──────────────┐   ┌───────────────┐  │ │
//! │  │  │  Database   │   │ Repositories │   │  Migrations   │  │ │
//! │  │  │  (pool.rs)  │   │ branch, user │   │  (embedded)   │  │ │
//! │  │  │             │   │ product,     │   │  001_init.sql │  │ │
//! │  │  │ SqlitePool  │◄──│ purchase,    │   │  002_items..  │  │ │
//! │  │  │ management  │   │ analytics    │   │               │  │ │
//! │  │  └─────────────┘   └──────────────┘   └───────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! │       │                                                         │
//! │       ▼                                                         │
//! │                      SQLite Database                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aisle_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/aisle.db")).await?;
//! let branch = db.branches().get_or_create("SMKT001").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::analytics::AnalyticsRepository;
pub use repository::branch::BranchRepository;
pub use repository::product::ProductRepository;
pub use repository::purchase::PurchaseRepository;
pub use repository::user::UserRepository;
