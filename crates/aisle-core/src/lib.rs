//! # aisle-core: Pure Business Logic for Aisle POS
//!
//! This crate is the **heart** of Aisle POS. It contains the domain types and
//! business rules for recording purchases across supermarket branches, as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Aisle POS Architecture                     │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │  aisle-register / aisle-analytics (service crates)        │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │               ★ aisle-core (THIS CRATE) ★                 │ │
//! │  │                                                           │ │
//! │  │  ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌──────────┐  │ │
//! │  │  │  types  │  │  money  │  │ validation │  │  error   │  │ │
//! │  │  │ Purchase│  │  Money  │  │   rules    │  │  types   │  │ │
//! │  │  └─────────┘  └─────────┘  └────────────┘  └──────────┘  │ │
//! │  │                                                           │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │ │
//! │  └────────────────────────────┬──────────────────────────────┘ │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐ │
//! │  │                aisle-db (Database Layer)                  │ │
//! │  │         SQLite queries, migrations, repositories          │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Branch, User, Product, Purchase, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Purchase request validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aisle_core::Money` instead of
// `use aisle_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of distinct products in a single purchase request.
///
/// ## Business Reason
/// The register flow records small basket transactions; larger baskets go
/// through a different channel. Requests above this limit are rejected.
pub const MAX_PURCHASE_ITEMS: usize = 10;

/// Fixed quantity per purchase line.
///
/// ## Business Reason
/// The system records single-unit-per-product purchases. A product can appear
/// at most once per purchase, with quantity exactly 1.
pub const PURCHASE_ITEM_QUANTITY: i64 = 1;

/// Default minimum purchase count for the loyal-customers report.
pub const DEFAULT_LOYALTY_THRESHOLD: i64 = 3;

/// Default number of dense-rank levels in the top-sellers report.
pub const DEFAULT_TOP_RANK_LIMIT: i64 = 3;
