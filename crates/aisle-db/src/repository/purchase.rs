//! # Purchase Repository
//!
//! Database operations for purchases and their line items.
//!
//! ## Atomic Commit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Purchase Commit                                 │
//! │                                                                     │
//! │  BEGIN                                                              │
//! │    INSERT purchases (id, branch, user, timestamp, total, names)     │
//! │    INSERT purchase_items (purchase, product, qty=1, price snapshot) │
//! │    INSERT purchase_items ...          (one row per product)         │
//! │  COMMIT                                                             │
//! │                                                                     │
//! │  Any failure before COMMIT rolls the whole unit back: no orphaned   │
//! │  purchase, no orphaned items. Purchases are immutable afterwards.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Each item freezes the product's unit price at time of sale. Later catalog
//! price changes never touch committed purchases.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use aisle_core::{Money, Product, Purchase, PurchaseLine, PURCHASE_ITEM_QUANTITY};

/// Repository for purchase database operations.
#[derive(Debug, Clone)]
pub struct PurchaseRepository {
    pool: SqlitePool,
}

impl PurchaseRepository {
    /// Creates a new PurchaseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseRepository { pool }
    }

    /// Atomically commits a purchase and one line item per resolved
    /// product.
    ///
    /// ## Arguments
    /// * `supermarket_id` - Branch the purchase was made at (must exist)
    /// * `user_id` - Customer making the purchase (must exist)
    /// * `products` - Resolved products; each contributes one line with its
    ///   current unit price as the at-sale snapshot
    /// * `total` - Server-computed total (sum of the products' unit prices)
    /// * `timestamp` - Purchase time
    ///
    /// The denormalized `items_list` column is computed here, once, from
    /// the resolved product names.
    ///
    /// Purchase creation is not idempotent: every call mints a new
    /// purchase id, even for identical inputs.
    pub async fn create(
        &self,
        supermarket_id: &str,
        user_id: &str,
        products: &[Product],
        total: Money,
        timestamp: DateTime<Utc>,
    ) -> DbResult<Purchase> {
        let purchase = Purchase {
            id: Uuid::new_v4().to_string(),
            supermarket_id: supermarket_id.to_string(),
            user_id: user_id.to_string(),
            timestamp,
            total_cents: total.cents(),
            items_list: products
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        };

        debug!(purchase_id = %purchase.id, items = products.len(), total = %total, "committing purchase");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO purchases (id, supermarket_id, user_id, timestamp, total_cents, items_list)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&purchase.id)
        .bind(&purchase.supermarket_id)
        .bind(&purchase.user_id)
        .bind(purchase.timestamp)
        .bind(purchase.total_cents)
        .bind(&purchase.items_list)
        .execute(&mut *tx)
        .await?;

        for product in products {
            sqlx::query(
                r#"
                INSERT INTO purchase_items (purchase_id, product_id, quantity, unit_price_cents)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&purchase.id)
            .bind(&product.id)
            .bind(PURCHASE_ITEM_QUANTITY)
            .bind(product.unit_price_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(purchase)
    }

    /// Fetches a committed purchase together with its lines, each line
    /// joined with its product name.
    ///
    /// Lines are ordered by product name for a deterministic view.
    pub async fn get_with_items(
        &self,
        id: &str,
    ) -> DbResult<Option<(Purchase, Vec<PurchaseLine>)>> {
        let purchase = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, supermarket_id, user_id, timestamp, total_cents, items_list
            FROM purchases
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(purchase) = purchase else {
            return Ok(None);
        };

        let lines = sqlx::query_as::<_, PurchaseLine>(
            r#"
            SELECT pi.product_id, p.name AS product_name, pi.unit_price_cents, pi.quantity
            FROM purchase_items pi
            INNER JOIN products p ON p.id = pi.product_id
            WHERE pi.purchase_id = ?1
            ORDER BY p.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some((purchase, lines)))
    }

    /// Newest-first page of purchases plus the total purchase count.
    ///
    /// `page` is 1-based; pages below 1 are treated as page 1.
    pub async fn list_page(&self, page: i64, page_size: i64) -> DbResult<(Vec<Purchase>, i64)> {
        let offset = (page.max(1) - 1) * page_size;

        let purchases = sqlx::query_as::<_, Purchase>(
            r#"
            SELECT id, supermarket_id, user_id, timestamp, total_cents, items_list
            FROM purchases
            ORDER BY timestamp DESC, id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = self.count().await?;

        Ok((purchases, total))
    }

    /// Counts purchases.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchases")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts purchase items across all purchases.
    pub async fn item_count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM purchase_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
