//! # aisle-register: Purchase Transaction Coordinator
//!
//! This crate implements the purchase-creation workflow for Aisle POS.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Purchase Creation Workflow                       │
//! │                                                                     │
//! │  1. VALIDATE INPUT (pure, aisle-core)                               │
//! │     └── items 1..=10, names unique, quantity 1  → InvalidPurchase   │
//! │  2. RESOLVE BRANCH (must pre-exist)             → BranchNotFound    │
//! │  3. RESOLVE/CREATE USER                         → PurchaseCreation  │
//! │  4. RESOLVE PRODUCTS (batch, all-or-nothing)    → ProductNotFound   │
//! │  5. CROSS-CHECK COUNT (defensive re-check)                          │
//! │  6. COMPUTE TOTAL (server-side, never client-supplied)              │
//! │  7. ATOMIC COMMIT (purchase + items, one transaction)               │
//! │  8. RE-READ FOR RECEIPT                         → Created           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every internal failure is translated into exactly one [`RegisterError`]
//! variant before it crosses the crate boundary - no raw store error
//! escapes.

pub mod error;
pub mod service;

pub use error::{RegisterError, RegisterResult};
pub use service::RegisterService;
