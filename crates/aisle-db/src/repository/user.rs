//! # User Repository
//!
//! Database operations for customers.
//!
//! Users are created lazily: the first purchase that references a customer
//! (or references none at all) gets or creates the row. The returned user is
//! always persisted before the caller proceeds.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use crate::repository::insert_if_absent;
use aisle_core::User;

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Gets a user by id. No side effects.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Gets an existing user or creates one.
    ///
    /// ## Semantics
    /// - id given and exists → return the existing row
    /// - id given and absent → create a user with that id
    /// - id omitted → generate a fresh UUID v4 and create
    ///
    /// Races on the same not-yet-existing id resolve through the primary
    /// key: the losing insert is ignored and the winning row is re-read.
    pub async fn get_or_create(&self, user_id: Option<&str>) -> DbResult<User> {
        let id = match user_id {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };

        debug!(user_id = %id, supplied = user_id.is_some(), "get-or-create user");

        insert_if_absent(
            &self.pool,
            sqlx::query("INSERT OR IGNORE INTO users (id) VALUES (?1)").bind(id.clone()),
            "SELECT id FROM users WHERE id = ?1",
            &id,
        )
        .await
    }

    /// Counts users.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
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
    async fn test_get_or_create_generates_uuid_when_omitted() {
        let db = test_db().await;

        let user = db.users().get_or_create(None).await.unwrap();
        assert!(uuid::Uuid::parse_str(&user.id).is_ok());
        assert_eq!(db.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_with_supplied_id() {
        let db = test_db().await;
        let id = "550e8400-e29b-41d4-a716-446655440000";

        // absent → created with that id
        let created = db.users().get_or_create(Some(id)).await.unwrap();
        assert_eq!(created.id, id);

        // present → returned, not duplicated
        let again = db.users().get_or_create(Some(id)).await.unwrap();
        assert_eq!(again.id, id);
        assert_eq!(db.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_each_omitted_id_creates_a_distinct_user() {
        let db = test_db().await;

        let a = db.users().get_or_create(None).await.unwrap();
        let b = db.users().get_or_create(None).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(db.users().count().await.unwrap(), 2);
    }
}
