//! # Register Service
//!
//! The purchase transaction coordinator. Owns the whole flow from raw
//! request to committed receipt; see the crate docs for the state machine.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{RegisterError, RegisterResult};
use aisle_core::validation::validate_purchase_request;
use aisle_core::{Money, Product, PurchaseReceipt, PurchaseRequest};
use aisle_db::{Database, DbError};

/// Service for creating and retrieving purchase transactions.
///
/// ## Usage
/// ```rust,ignore
/// let register = RegisterService::new(db);
/// let receipt = register.create_purchase(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RegisterService {
    db: Database,
}

impl RegisterService {
    /// Creates a new RegisterService on top of the shared database handle.
    pub fn new(db: Database) -> Self {
        RegisterService { db }
    }

    /// Creates a new purchase transaction.
    ///
    /// Not idempotent: each call mints a new purchase id, even for
    /// identical inputs. There is no dedup key in the contract.
    ///
    /// ## Errors
    /// * [`RegisterError::InvalidPurchaseData`] - malformed request
    /// * [`RegisterError::BranchNotFound`] - branch must pre-exist
    /// * [`RegisterError::ProductNotFound`] - lists every missing name
    /// * [`RegisterError::PurchaseCreation`] - commit/re-read failed (full
    ///   rollback, no partial rows retained)
    pub async fn create_purchase(&self, request: PurchaseRequest) -> RegisterResult<PurchaseReceipt> {
        // 1. Validate input before touching the store.
        let request = request.normalize();
        validate_purchase_request(&request)?;

        info!(
            branch = %request.supermarket_id,
            items = request.items.len(),
            "starting purchase creation"
        );

        // 2. Resolve the branch. Unknown branch is a hard error here -
        // the transactional path never auto-creates branches, and no user
        // row is created before this check passes.
        let branch = self
            .db
            .branches()
            .get_by_id(&request.supermarket_id)
            .await?
            .ok_or_else(|| {
                warn!(branch = %request.supermarket_id, "unknown branch");
                RegisterError::BranchNotFound(request.supermarket_id.clone())
            })?;

        // 3. Resolve or create the customer.
        let user = self
            .db
            .users()
            .get_or_create(request.user_id.as_deref())
            .await
            .map_err(|e| {
                RegisterError::PurchaseCreation(format!("failed to get or create user: {e}"))
            })?;

        // 4. Resolve every requested product by name, all-or-nothing.
        let names: Vec<String> = request
            .items
            .iter()
            .map(|item| item.product_name.clone())
            .collect();
        let products = self.db.products().get_by_names(&names).await.map_err(|e| match e {
            DbError::NotFound { id, .. } => RegisterError::ProductNotFound(id),
            other => RegisterError::Store(other),
        })?;

        // 5. Defensive re-check: resolved count must match the request,
        // even though step 4 already guarantees it internally.
        if products.len() != request.items.len() {
            let found: HashSet<&str> = products.iter().map(|p| p.name.as_str()).collect();
            let missing: Vec<&str> = names
                .iter()
                .map(String::as_str)
                .filter(|name| !found.contains(name))
                .collect();
            return Err(RegisterError::ProductNotFound(missing.join(", ")));
        }

        // 6. Server-computed total: the sum of the resolved products'
        // current unit prices. Never a client-supplied amount.
        let total: Money = products.iter().map(Product::unit_price).sum();
        let timestamp = request.timestamp.unwrap_or_else(Utc::now);

        debug!(total = %total, "purchase total computed");

        // 7. Atomic commit of the purchase and one item per product.
        let purchase = self
            .db
            .purchases()
            .create(&branch.id, &user.id, &products, total, timestamp)
            .await
            .map_err(|e| RegisterError::PurchaseCreation(e.to_string()))?;

        // 8. Re-read the committed purchase for the receipt view. Absence
        // here should be impossible under a correct commit.
        let (purchase, items) = self
            .db
            .purchases()
            .get_with_items(&purchase.id)
            .await
            .map_err(|e| RegisterError::PurchaseCreation(e.to_string()))?
            .ok_or_else(|| {
                RegisterError::PurchaseCreation(
                    "purchase committed but cannot be re-read".to_string(),
                )
            })?;

        info!(
            purchase_id = %purchase.id,
            user_id = %purchase.user_id,
            total = %purchase.total(),
            "purchase created"
        );

        Ok(PurchaseReceipt {
            id: purchase.id,
            supermarket_id: purchase.supermarket_id,
            user_id: purchase.user_id,
            timestamp: purchase.timestamp,
            total_cents: purchase.total_cents,
            items,
        })
    }

    /// Fetches one committed purchase as a receipt view.
    ///
    /// ## Returns
    /// * `Ok(Some(receipt))` - Purchase found
    /// * `Ok(None)` - No purchase with that id
    pub async fn get_purchase(&self, id: &str) -> RegisterResult<Option<PurchaseReceipt>> {
        let Some((purchase, items)) = self.db.purchases().get_with_items(id).await? else {
            return Ok(None);
        };

        Ok(Some(PurchaseReceipt {
            id: purchase.id,
            supermarket_id: purchase.supermarket_id,
            user_id: purchase.user_id,
            timestamp: purchase.timestamp,
            total_cents: purchase.total_cents,
            items,
        }))
    }
}
