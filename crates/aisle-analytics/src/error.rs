//! # Analytics Error Types
//!
//! The analytics engine has a single failure class: the underlying store.
//! Reports either compute or surface the classified store error.

use thiserror::Error;

use aisle_db::DbError;

/// Errors surfaced by the analytics engine.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Store-level failure while computing a report.
    #[error(transparent)]
    Store(#[from] DbError),
}

impl AnalyticsError {
    /// Machine-readable error code for the boundary.
    pub fn code(&self) -> &'static str {
        match self {
            AnalyticsError::Store(_) => "DATABASE_ERROR",
        }
    }
}

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
