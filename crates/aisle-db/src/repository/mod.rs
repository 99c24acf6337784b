//! # Repository Module
//!
//! Database repository implementations for Aisle POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Service crate                                                      │
//! │       │  db.products().get_by_names(&names)                         │
//! │       ▼                                                             │
//! │  ProductRepository ── SQL ──► SQLite                                │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Clean separation of concerns                                     │
//! │  • Easy to test against an in-memory database                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`branch::BranchRepository`] - Branch lookup and get-or-create
//! - [`user::UserRepository`] - User lookup and get-or-create
//! - [`product::ProductRepository`] - Catalog lookup and batch name resolution
//! - [`purchase::PurchaseRepository`] - Atomic purchase + item commit
//! - [`analytics::AnalyticsRepository`] - Read-only aggregate queries

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::{DbError, DbResult};

pub mod analytics;
pub mod branch;
pub mod product;
pub mod purchase;
pub mod user;

/// Generic insert-if-absent keyed on a uniqueness constraint.
///
/// Branch, user and product get-or-create all share this one capability:
/// run the given `INSERT OR IGNORE` (a lost race simply means someone else
/// won the insert), then re-read by natural key and return the winning row.
/// No application-level locks are involved - the store's unique constraint
/// is the arbiter.
///
/// `select_sql` must select the row by a single `?1` placeholder bound to
/// `key`, the same natural key the insert targets.
pub(crate) async fn insert_if_absent<'q, T, E>(
    pool: &SqlitePool,
    insert: E,
    select_sql: &'q str,
    key: &'q str,
) -> DbResult<T>
where
    E: sqlx::Execute<'q, Sqlite> + 'q,
    T: Send + Unpin + for<'r> sqlx::FromRow<'r, SqliteRow> + 'q,
{
    pool.execute(insert).await?;

    // The row is now guaranteed to exist: either we inserted it or a
    // concurrent caller did. A miss here means the store lost the row
    // between the two statements, which is not a normal outcome.
    sqlx::query_as::<_, T>(select_sql)
        .bind(key)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DbError::Internal("upserted row missing on re-read".to_string()))
}
