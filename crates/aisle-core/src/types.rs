//! # Domain Types
//!
//! Core domain types used throughout Aisle POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────────┐      │
//! │  │    Branch     │   │    Product    │   │     Purchase      │      │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────────  │      │
//! │  │  id (code)    │   │  id (UUID)    │   │  id (UUID)        │      │
//! │  │               │   │  name (uniq)  │   │  supermarket_id   │      │
//! │  └───────────────┘   │  price_cents  │   │  user_id          │      │
//! │                      └───────────────┘   │  total_cents      │      │
//! │  ┌───────────────┐                       │  items_list       │      │
//! │  │     User      │   ┌───────────────────┴───────┐           │      │
//! │  │  ───────────  │   │       PurchaseLine        │           │      │
//! │  │  id (UUID)    │   │  (purchase_id, product_id)│           │      │
//! │  └───────────────┘   │  unit_price snapshot, qty │           │      │
//! │                      └───────────────────────────┘           │      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! - Branch: externally supplied string code (e.g. "SMKT001")
//! - User / Product / Purchase: UUID v4, stored as TEXT
//! - PurchaseLine: composite identity (purchase id, product id)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::PURCHASE_ITEM_QUANTITY;

// =============================================================================
// Entities
// =============================================================================

/// A physical store location, identified by an external string code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Branch {
    /// Externally supplied branch code (e.g. "SMKT001").
    pub id: String,
}

/// A customer. Created lazily the first time a purchase references them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// UUID v4, system-generated unless supplied by the caller.
    pub id: String,
}

/// A catalog product with a unique name and a current unit price.
///
/// Products are referenced by purchase items, never cascade-deleted:
/// deleting a product that any purchase item references is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// UUID v4.
    pub id: String,

    /// Unique product name - the natural key purchase requests use.
    pub name: String,

    /// Current catalog price in cents, fixed at catalog time.
    pub unit_price_cents: i64,
}

impl Product {
    /// Returns the current catalog price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

/// A completed purchase transaction. Immutable after commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Purchase {
    /// UUID v4.
    pub id: String,

    /// Branch where the purchase was made.
    pub supermarket_id: String,

    /// Customer who made the purchase.
    pub user_id: String,

    /// When the purchase was made (defaults to creation time).
    pub timestamp: DateTime<Utc>,

    /// Server-computed total in cents.
    pub total_cents: i64,

    /// Denormalized comma-joined product names, computed once at creation.
    /// Never a source of truth for totals or counts.
    pub items_list: String,
}

impl Purchase {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// One line of a purchase, joined with its product for display.
///
/// Uses the snapshot pattern: `unit_price_cents` is the price at time of
/// sale, which may differ from the product's current catalog price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseLine {
    pub product_id: String,
    pub product_name: String,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Always 1 (single-unit-per-product purchases).
    pub quantity: i64,
}

impl PurchaseLine {
    /// Returns the price-at-sale snapshot as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Purchase Request (inbound boundary)
// =============================================================================

/// One requested item: a product referenced by name, quantity fixed at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseItemRequest {
    pub product_name: String,

    /// Defaults to 1; any other value is rejected by validation.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    PURCHASE_ITEM_QUANTITY
}

impl PurchaseItemRequest {
    /// Builds a single-unit item for the given product name.
    pub fn new(product_name: impl Into<String>) -> Self {
        PurchaseItemRequest {
            product_name: product_name.into(),
            quantity: PURCHASE_ITEM_QUANTITY,
        }
    }
}

/// An inbound purchase request, consumed by the transaction coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Branch code; must reference an existing branch.
    pub supermarket_id: String,

    /// Optional customer id. Absent for walk-in customers: a new user is
    /// created and returned in the receipt.
    #[serde(default)]
    pub user_id: Option<String>,

    /// 1..=10 entries, product names unique within the list.
    pub items: Vec<PurchaseItemRequest>,

    /// Optional purchase time; defaults to request time.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PurchaseRequest {
    /// Trims the branch code and product names in place.
    ///
    /// Validation and resolution both operate on the trimmed values, so the
    /// coordinator normalizes once up front.
    pub fn normalize(mut self) -> Self {
        self.supermarket_id = self.supermarket_id.trim().to_string();
        for item in &mut self.items {
            item.product_name = item.product_name.trim().to_string();
        }
        self
    }
}

// =============================================================================
// Purchase Receipt (outbound boundary)
// =============================================================================

/// The response view of a committed purchase, re-read from the store
/// together with its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub id: String,
    pub supermarket_id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub total_cents: i64,
    pub items: Vec<PurchaseLine>,
}

impl PurchaseReceipt {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Aggregate Views
// =============================================================================

/// Per-branch sales aggregate: total committed sales and distinct customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BranchSalesSummary {
    pub supermarket_id: String,
    pub total_cents: i64,
    pub customer_count: i64,
}

/// A customer whose purchase count met the loyalty threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LoyalCustomer {
    pub user_id: String,
    pub purchase_count: i64,
}

/// One row of the top-sellers report.
///
/// `rank` is a dense rank: ties share a rank and the next distinct total
/// gets rank+1, with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TopSeller {
    pub product_name: String,
    pub total_sold: i64,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "popularity_rank"))]
    pub rank: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_branch_and_product_names() {
        let request = PurchaseRequest {
            supermarket_id: "  SMKT001 ".to_string(),
            user_id: None,
            items: vec![PurchaseItemRequest::new(" Milk ")],
            timestamp: None,
        }
        .normalize();

        assert_eq!(request.supermarket_id, "SMKT001");
        assert_eq!(request.items[0].product_name, "Milk");
    }

    #[test]
    fn test_item_request_defaults_to_single_unit() {
        let item = PurchaseItemRequest::new("Bread");
        assert_eq!(item.quantity, PURCHASE_ITEM_QUANTITY);

        // quantity omitted on the wire deserializes to 1
        let parsed: PurchaseItemRequest =
            serde_json::from_str(r#"{"product_name":"Bread"}"#).unwrap();
        assert_eq!(parsed.quantity, 1);
    }

    #[test]
    fn test_product_unit_price() {
        let product = Product {
            id: "p1".to_string(),
            name: "Milk".to_string(),
            unit_price_cents: 250,
        };
        assert_eq!(product.unit_price(), Money::from_cents(250));
    }
}
