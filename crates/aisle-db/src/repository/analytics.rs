//! # Analytics Repository
//!
//! Read-only aggregate queries over the full purchase history.
//!
//! This repository never mutates state. All three queries run as plain
//! reads on the pool; with WAL journaling they never block a concurrent
//! purchase commit.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aisle_core::{LoyalCustomer, TopSeller};

/// Repository for analytics aggregate queries.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    pool: SqlitePool,
}

impl AnalyticsRepository {
    /// Creates a new AnalyticsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AnalyticsRepository { pool }
    }

    /// Counts distinct users ever recorded as a purchase's owner.
    ///
    /// Defined over purchase participation, not over user rows: a user row
    /// with no purchases does not count.
    pub async fn unique_buyers(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT user_id) FROM purchases")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Users with at least `min_purchases` purchases, with their counts.
    ///
    /// Ordered by purchase count descending; ties are ordered by user id
    /// ascending so results are reproducible.
    pub async fn loyal_customers(&self, min_purchases: i64) -> DbResult<Vec<LoyalCustomer>> {
        let customers = sqlx::query_as::<_, LoyalCustomer>(
            r#"
            SELECT user_id, COUNT(*) AS purchase_count
            FROM purchases
            GROUP BY user_id
            HAVING COUNT(*) >= ?1
            ORDER BY purchase_count DESC, user_id
            "#,
        )
        .bind(min_purchases)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), min_purchases, "loyal customers");
        Ok(customers)
    }

    /// Top-selling products by total quantity sold, with dense ranking.
    ///
    /// ## Dense Rank With Overflow
    /// ```text
    /// totals [20, 20, 5, 1], limit 3
    ///      │
    ///      ▼
    /// DENSE_RANK: 20→1, 20→1, 5→2, 1→3
    ///      │
    ///      ▼
    /// rank <= 3 keeps ALL FOUR products
    /// ```
    ///
    /// `limit` bounds the number of distinct popularity levels, not the
    /// number of rows: products tied at a kept rank are all returned, so
    /// the result can hold more rows than `limit`. This is deliberate - it
    /// preserves fairness across tied products.
    ///
    /// Ordered by total descending, then product name ascending within a
    /// rank.
    pub async fn top_sellers(&self, limit: i64) -> DbResult<Vec<TopSeller>> {
        let sellers = sqlx::query_as::<_, TopSeller>(
            r#"
            SELECT product_name, total_sold, popularity_rank
            FROM (
                SELECT
                    p.name AS product_name,
                    SUM(pi.quantity) AS total_sold,
                    DENSE_RANK() OVER (ORDER BY SUM(pi.quantity) DESC) AS popularity_rank
                FROM products p
                INNER JOIN purchase_items pi ON pi.product_id = p.id
                GROUP BY p.id, p.name
            )
            WHERE popularity_rank <= ?1
            ORDER BY total_sold DESC, product_name
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = sellers.len(), limit, "top sellers");
        Ok(sellers)
    }
}
