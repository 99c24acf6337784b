//! # Analytics Service
//!
//! Business logic for the analytics reports. Thin by design: the SQL lives
//! in the analytics repository; this layer applies defaults and shapes the
//! report views.

use tracing::info;

use crate::error::AnalyticsResult;
use crate::reports::{LoyalCustomersReport, TopSellersReport, UniqueBuyersReport};
use aisle_core::{DEFAULT_LOYALTY_THRESHOLD, DEFAULT_TOP_RANK_LIMIT};
use aisle_db::Database;

/// Service for store analytics.
///
/// ## Usage
/// ```rust,ignore
/// let analytics = AnalyticsService::new(db);
/// let report = analytics.top_sellers(None).await?; // default limit
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    db: Database,
}

impl AnalyticsService {
    /// Creates a new AnalyticsService on top of the shared database handle.
    pub fn new(db: Database) -> Self {
        AnalyticsService { db }
    }

    /// Count of unique buyers across all branches.
    ///
    /// Strictly users appearing as a purchase owner - a user row that never
    /// purchased does not count.
    pub async fn unique_buyers(&self) -> AnalyticsResult<UniqueBuyersReport> {
        let count = self.db.analytics().unique_buyers().await?;

        info!(count, "unique buyers computed");
        Ok(UniqueBuyersReport {
            unique_buyers_count: count,
        })
    }

    /// Customers with at least `min_purchases` purchases
    /// (default [`DEFAULT_LOYALTY_THRESHOLD`]).
    pub async fn loyal_customers(
        &self,
        min_purchases: Option<i64>,
    ) -> AnalyticsResult<LoyalCustomersReport> {
        let min_purchases = min_purchases.unwrap_or(DEFAULT_LOYALTY_THRESHOLD);
        let customers = self.db.analytics().loyal_customers(min_purchases).await?;

        info!(count = customers.len(), min_purchases, "loyal customers computed");
        Ok(LoyalCustomersReport {
            total_loyal_customers: customers.len(),
            loyal_customers: customers,
            min_purchases,
        })
    }

    /// Top-selling products within the first `limit` dense-rank levels
    /// (default [`DEFAULT_TOP_RANK_LIMIT`]).
    ///
    /// The report can hold more products than `limit` when totals tie at a
    /// kept rank - that overflow is part of the contract, not a bug.
    pub async fn top_sellers(&self, limit: Option<i64>) -> AnalyticsResult<TopSellersReport> {
        let limit = limit.unwrap_or(DEFAULT_TOP_RANK_LIMIT);
        let sellers = self.db.analytics().top_sellers(limit).await?;

        info!(count = sellers.len(), limit, "top sellers computed");
        Ok(TopSellersReport {
            total_products_found: sellers.len(),
            top_selling_products: sellers,
            limit,
        })
    }
}
