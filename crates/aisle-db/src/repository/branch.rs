//! # Branch Repository
//!
//! Database operations for supermarket branches.
//!
//! Branches are identified by an externally supplied code (e.g. "SMKT001")
//! and are created eagerly by catalog loading. The purchase flow only ever
//! reads them: an unknown branch is a hard error there, never an implicit
//! create.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::insert_if_absent;
use aisle_core::{Branch, BranchSalesSummary};

/// Repository for branch database operations.
#[derive(Debug, Clone)]
pub struct BranchRepository {
    pool: SqlitePool,
}

impl BranchRepository {
    /// Creates a new BranchRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BranchRepository { pool }
    }

    /// Gets a branch by its code. No side effects.
    ///
    /// ## Returns
    /// * `Ok(Some(Branch))` - Branch found
    /// * `Ok(None)` - Branch not found (a normal outcome for callers)
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Branch>> {
        let branch = sqlx::query_as::<_, Branch>("SELECT id FROM branches WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(branch)
    }

    /// Lists all branches, ordered by code.
    pub async fn list(&self) -> DbResult<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>("SELECT id FROM branches ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(branches)
    }

    /// Gets an existing branch or creates a new one with the given code.
    ///
    /// Concurrent calls with the same code converge on a single row: the
    /// primary key decides the winner and the loser re-reads.
    pub async fn get_or_create(&self, id: &str) -> DbResult<Branch> {
        debug!(branch_id = %id, "get-or-create branch");

        insert_if_absent(
            &self.pool,
            sqlx::query("INSERT OR IGNORE INTO branches (id) VALUES (?1)").bind(id),
            "SELECT id FROM branches WHERE id = ?1",
            id,
        )
        .await
    }

    /// Counts branches.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM branches")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Sales aggregate for one branch: total committed sales and the number
    /// of distinct customers who purchased there.
    ///
    /// ## Errors
    /// `DbError::NotFound` if the branch doesn't exist (zero sales at an
    /// existing branch is a normal summary, not an error).
    pub async fn sales_summary(&self, id: &str) -> DbResult<BranchSalesSummary> {
        if self.get_by_id(id).await?.is_none() {
            return Err(DbError::not_found("Branch", id));
        }

        let summary = sqlx::query_as::<_, BranchSalesSummary>(
            r#"
            SELECT
                ?1 AS supermarket_id,
                COALESCE(SUM(total_cents), 0) AS total_cents,
                COUNT(DISTINCT user_id) AS customer_count
            FROM purchases
            WHERE supermarket_id = ?1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let db = test_db().await;
        assert!(db.branches().get_by_id("SMKT404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let db = test_db().await;

        let first = db.branches().get_or_create("SMKT001").await.unwrap();
        let second = db.branches().get_or_create("SMKT001").await.unwrap();

        assert_eq!(first.id, "SMKT001");
        assert_eq!(first, second);
        assert_eq!(db.branches().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_is_ordered() {
        let db = test_db().await;
        db.branches().get_or_create("SMKT002").await.unwrap();
        db.branches().get_or_create("SMKT001").await.unwrap();

        let branches = db.branches().list().await.unwrap();
        let codes: Vec<&str> = branches.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(codes, vec!["SMKT001", "SMKT002"]);
    }

    #[tokio::test]
    async fn test_sales_summary_unknown_branch() {
        let db = test_db().await;
        assert!(db.branches().sales_summary("SMKT404").await.is_err());
    }

    #[tokio::test]
    async fn test_sales_summary_empty_branch_is_zero() {
        let db = test_db().await;
        db.branches().get_or_create("SMKT001").await.unwrap();

        let summary = db.branches().sales_summary("SMKT001").await.unwrap();
        assert_eq!(summary.total_cents, 0);
        assert_eq!(summary.customer_count, 0);
    }
}
