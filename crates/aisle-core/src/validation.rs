//! # Validation Module
//!
//! Input validation for purchase requests and catalog fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: THIS MODULE (pure, before any store access)               │
//! │  ├── items list non-empty, at most 10 distinct products             │
//! │  ├── no duplicate product names within one request                  │
//! │  └── identifiers non-empty, quantity exactly 1                      │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                         │
//! │  ├── NOT NULL / CHECK constraints                                   │
//! │  ├── UNIQUE constraints (product name, primary keys)                │
//! │  └── Foreign key constraints (cascade / restrict rules)             │
//! │                                                                     │
//! │  Defense in depth: the layers catch different errors                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{ValidationError, ValidationResult};
use crate::types::PurchaseRequest;
use crate::{Money, MAX_PURCHASE_ITEMS, PURCHASE_ITEM_QUANTITY};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a branch code.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_branch_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "supermarket_id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product_name".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog or snapshot price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a user id as a UUID string.
///
/// ## Example
/// ```rust
/// use aisle_core::validation::validate_user_id;
///
/// assert!(validate_user_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_user_id("not-a-uuid").is_err());
/// ```
pub fn validate_user_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "user_id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "user_id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Purchase Request Validation
// =============================================================================

/// Validates a full purchase request before the coordinator touches the
/// store. Expects a normalized request (see [`PurchaseRequest::normalize`]).
///
/// ## Rules
/// - supermarket_id non-empty
/// - user_id, if supplied, a valid UUID
/// - items list non-empty and at most [`MAX_PURCHASE_ITEMS`] entries
/// - every product name non-empty and unique within the request
/// - every quantity exactly [`PURCHASE_ITEM_QUANTITY`]
pub fn validate_purchase_request(request: &PurchaseRequest) -> ValidationResult<()> {
    validate_branch_id(&request.supermarket_id)?;

    if let Some(user_id) = &request.user_id {
        validate_user_id(user_id)?;
    }

    if request.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if request.items.len() > MAX_PURCHASE_ITEMS {
        return Err(ValidationError::TooMany {
            field: "items".to_string(),
            max: MAX_PURCHASE_ITEMS,
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(request.items.len());
    for item in &request.items {
        validate_product_name(&item.product_name)?;

        if item.quantity != PURCHASE_ITEM_QUANTITY {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: PURCHASE_ITEM_QUANTITY,
                max: PURCHASE_ITEM_QUANTITY,
            });
        }

        if !seen.insert(item.product_name.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "product_name".to_string(),
                value: item.product_name.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PurchaseItemRequest;

    fn request(items: Vec<PurchaseItemRequest>) -> PurchaseRequest {
        PurchaseRequest {
            supermarket_id: "SMKT001".to_string(),
            user_id: None,
            items,
            timestamp: None,
        }
    }

    #[test]
    fn test_validate_branch_id() {
        assert!(validate_branch_id("SMKT001").is_ok());
        assert!(validate_branch_id("").is_err());
        assert!(validate_branch_id("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(250)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = validate_purchase_request(&request(vec![])).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_too_many_items_rejected() {
        let items: Vec<_> = (0..11)
            .map(|i| PurchaseItemRequest::new(format!("Product {i}")))
            .collect();
        let err = validate_purchase_request(&request(items)).unwrap_err();
        assert!(matches!(err, ValidationError::TooMany { max: 10, .. }));
    }

    #[test]
    fn test_ten_items_allowed() {
        let items: Vec<_> = (0..10)
            .map(|i| PurchaseItemRequest::new(format!("Product {i}")))
            .collect();
        assert!(validate_purchase_request(&request(items)).is_ok());
    }

    #[test]
    fn test_duplicate_product_names_rejected() {
        let items = vec![
            PurchaseItemRequest::new("Milk"),
            PurchaseItemRequest::new("Milk"),
        ];
        let err = validate_purchase_request(&request(items)).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn test_multi_unit_quantity_rejected() {
        let mut item = PurchaseItemRequest::new("Milk");
        item.quantity = 2;
        let err = validate_purchase_request(&request(vec![item])).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_valid_request_passes() {
        let items = vec![
            PurchaseItemRequest::new("Milk"),
            PurchaseItemRequest::new("Bread"),
        ];
        assert!(validate_purchase_request(&request(items)).is_ok());
    }
}
