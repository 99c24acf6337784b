//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Batch Name Resolution
//! The purchase flow references products by name. Resolution is all-or-
//! nothing: `get_by_names` either resolves every requested name or fails
//! with a NotFound error listing every name that has no match. Callers can
//! always distinguish "all resolved" from "some missing" - there is no
//! silent partial result.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::repository::insert_if_absent;
use aisle_core::{Money, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, unit_price_cents FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its unique name.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found (a normal outcome for callers)
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, unit_price_cents FROM products WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Resolves a batch of product names.
    ///
    /// ## Errors
    /// `DbError::NotFound` listing every unresolved name if any requested
    /// name has no matching product. Never returns a partial result.
    pub async fn get_by_names(&self, names: &[String]) -> DbResult<Vec<Product>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, name, unit_price_cents FROM products WHERE name IN (",
        );
        let mut separated = builder.separated(", ");
        for name in names {
            separated.push_bind(name.as_str());
        }
        separated.push_unseparated(")");

        let products: Vec<Product> = builder.build_query_as().fetch_all(&self.pool).await?;

        let found: HashSet<&str> = products.iter().map(|p| p.name.as_str()).collect();
        let missing: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| !found.contains(name))
            .collect();

        if !missing.is_empty() {
            return Err(DbError::not_found("Product", missing.join(", ")));
        }

        debug!(count = products.len(), "resolved products by name");
        Ok(products)
    }

    /// Gets an existing product or creates one with the given name and
    /// price.
    ///
    /// The price is only applied on creation - an existing product's
    /// catalog price is never updated by this call.
    pub async fn get_or_create(&self, name: &str, unit_price: Money) -> DbResult<Product> {
        let id = Uuid::new_v4().to_string();

        debug!(product_name = %name, price = %unit_price, "get-or-create product");

        insert_if_absent(
            &self.pool,
            sqlx::query("INSERT OR IGNORE INTO products (id, name, unit_price_cents) VALUES (?1, ?2, ?3)")
                .bind(id)
                .bind(name)
                .bind(unit_price.cents()),
            "SELECT id, name, unit_price_cents FROM products WHERE name = ?1",
            name,
        )
        .await
    }

    /// Lists the full catalog, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, unit_price_cents FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts catalog products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_or_create_keeps_original_price() {
        let db = test_db().await;

        let created = db
            .products()
            .get_or_create("Milk", Money::from_cents(250))
            .await
            .unwrap();
        assert_eq!(created.unit_price_cents, 250);

        // Second call with a different price returns the existing row
        let again = db
            .products()
            .get_or_create("Milk", Money::from_cents(999))
            .await
            .unwrap();
        assert_eq!(again.id, created.id);
        assert_eq!(again.unit_price_cents, 250);
        assert_eq!(db.products().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_by_names_resolves_all() {
        let db = test_db().await;
        db.products()
            .get_or_create("Milk", Money::from_cents(250))
            .await
            .unwrap();
        db.products()
            .get_or_create("Bread", Money::from_cents(120))
            .await
            .unwrap();

        let products = db
            .products()
            .get_by_names(&["Milk".to_string(), "Bread".to_string()])
            .await
            .unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_names_lists_every_missing_name() {
        let db = test_db().await;
        db.products()
            .get_or_create("Milk", Money::from_cents(250))
            .await
            .unwrap();

        let err = db
            .products()
            .get_by_names(&[
                "Milk".to_string(),
                "Caviar".to_string(),
                "Truffles".to_string(),
            ])
            .await
            .unwrap_err();

        match err {
            DbError::NotFound { entity, id } => {
                assert_eq!(entity, "Product");
                assert!(id.contains("Caviar"));
                assert!(id.contains("Truffles"));
                assert!(!id.contains("Milk"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_by_names_empty_input() {
        let db = test_db().await;
        let products = db.products().get_by_names(&[]).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_name_absent_is_none() {
        let db = test_db().await;
        assert!(db.products().get_by_name("Ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_and_list() {
        let db = test_db().await;
        let milk = db
            .products()
            .get_or_create("Milk", Money::from_cents(250))
            .await
            .unwrap();
        db.products()
            .get_or_create("Bread", Money::from_cents(120))
            .await
            .unwrap();

        let fetched = db.products().get_by_id(&milk.id).await.unwrap().unwrap();
        assert_eq!(fetched, milk);

        let catalog = db.products().list().await.unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }
}
