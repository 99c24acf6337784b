//! # Report Views
//!
//! Serializable response shapes for the three analytics reports. Each
//! report echoes back the parameters it was computed with so callers can
//! render results without re-threading their inputs.

use serde::{Deserialize, Serialize};

use aisle_core::{LoyalCustomer, TopSeller};

/// Count of distinct users ever recorded as a purchase's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueBuyersReport {
    pub unique_buyers_count: i64,
}

/// Customers whose purchase count met the threshold, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyalCustomersReport {
    pub loyal_customers: Vec<LoyalCustomer>,

    /// The threshold the report was computed with.
    pub min_purchases: i64,

    pub total_loyal_customers: usize,
}

/// Dense-ranked top sellers.
///
/// `total_products_found` can exceed `limit`: products tied at a kept rank
/// are all returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSellersReport {
    pub top_selling_products: Vec<TopSeller>,

    /// The requested number of rank levels.
    pub limit: i64,

    pub total_products_found: usize,
}
