//! # aisle-analytics: Analytics Aggregation Engine
//!
//! Read-only analytics over the purchase history recorded by
//! aisle-register.
//!
//! ## Reports
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Analytics Reports                             │
//! │                                                                     │
//! │  Unique buyers      COUNT(DISTINCT user_id) over purchases          │
//! │  Loyal customers    purchase count per user >= threshold            │
//! │  Top sellers        dense-ranked totals, ties kept past the limit   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All queries are plain reads: the engine never mutates the entity store
//! and never blocks concurrent purchase creation.

pub mod error;
pub mod reports;
pub mod service;

pub use error::{AnalyticsError, AnalyticsResult};
pub use reports::{LoyalCustomersReport, TopSellersReport, UniqueBuyersReport};
pub use service::AnalyticsService;
