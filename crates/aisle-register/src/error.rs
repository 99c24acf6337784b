//! # Register Error Types
//!
//! The error taxonomy the coordinator exposes. Four classes, each with a
//! human message and a machine-readable code:
//!
//! | Class               | Code                    | When                           |
//! |---------------------|-------------------------|--------------------------------|
//! | InvalidPurchaseData | INVALID_PURCHASE_DATA   | malformed request              |
//! | BranchNotFound      | BRANCH_NOT_FOUND        | branch must pre-exist          |
//! | ProductNotFound     | PRODUCT_NOT_FOUND       | unresolved product names       |
//! | PurchaseCreation    | PURCHASE_CREATION_ERROR | commit or re-read failed       |
//! | Store               | DATABASE_ERROR          | unclassified store failure     |

use thiserror::Error;

use aisle_core::ValidationError;
use aisle_db::DbError;

/// Errors surfaced by the purchase transaction coordinator.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The purchase request failed validation before any store access.
    #[error("Invalid purchase data: {0}")]
    InvalidPurchaseData(String),

    /// The referenced branch does not exist. Branches must pre-exist at
    /// purchase time; the transactional path never auto-creates them.
    #[error("Branch '{0}' not found")]
    BranchNotFound(String),

    /// One or more requested product names have no matching catalog
    /// product. The message lists every missing name.
    #[error("Products not found: {0}")]
    ProductNotFound(String),

    /// The purchase could not be committed, or the committed purchase
    /// could not be re-read. The partial transaction was rolled back.
    #[error("Failed to create purchase: {0}")]
    PurchaseCreation(String),

    /// Generic store failure not otherwise classified.
    #[error(transparent)]
    Store(#[from] DbError),
}

impl RegisterError {
    /// Machine-readable error code for the boundary.
    pub fn code(&self) -> &'static str {
        match self {
            RegisterError::InvalidPurchaseData(_) => "INVALID_PURCHASE_DATA",
            RegisterError::BranchNotFound(_) => "BRANCH_NOT_FOUND",
            RegisterError::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            RegisterError::PurchaseCreation(_) => "PURCHASE_CREATION_ERROR",
            RegisterError::Store(_) => "DATABASE_ERROR",
        }
    }
}

impl From<ValidationError> for RegisterError {
    fn from(err: ValidationError) -> Self {
        RegisterError::InvalidPurchaseData(err.to_string())
    }
}

/// Result type for coordinator operations.
pub type RegisterResult<T> = Result<T, RegisterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            RegisterError::BranchNotFound("SMKT404".into()).code(),
            "BRANCH_NOT_FOUND"
        );
        assert_eq!(
            RegisterError::ProductNotFound("Caviar".into()).code(),
            "PRODUCT_NOT_FOUND"
        );
        assert_eq!(
            RegisterError::Store(DbError::Internal("boom".into())).code(),
            "DATABASE_ERROR"
        );
    }

    #[test]
    fn test_validation_error_becomes_invalid_purchase_data() {
        let err: RegisterError = ValidationError::Required {
            field: "items".to_string(),
        }
        .into();
        assert_eq!(err.code(), "INVALID_PURCHASE_DATA");
        assert_eq!(err.to_string(), "Invalid purchase data: items is required");
    }
}
