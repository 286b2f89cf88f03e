//! # Inventory Service
//!
//! Query and adjustment operations over an injected [`ProductStore`].
//!
//! ## Adjustment Flow
//! ```text
//! adjust(product_id, quantity)
//!      │
//!      ▼
//! store.adjust_inventory(id, delta)   ← one atomic guarded write
//!      │
//!      ├── Applied(product)   → Ok(product)
//!      ├── NotFound           → CoreError::ProductNotFound
//!      └── Rejected{available}→ apply_delta(available, delta) names the
//!                               violated rule (insufficient / overflow)
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use sellhub_core::inventory::{apply_delta, consume};
use sellhub_core::{CoreError, Product, ValidationError, MAX_INVENTORY_COUNT};
use sellhub_db::{DbError, ProductStore, StockAdjustment};

/// Failure of a service operation.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DbError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory operations. Cheap to clone.
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn ProductStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        InventoryService { store }
    }

    /// Every product in the store. An empty store is not an error.
    pub async fn list_all(&self) -> InventoryResult<Vec<Product>> {
        let products = self.store.list_all().await?;
        debug!(count = products.len(), "Listed inventory");
        Ok(products)
    }

    /// One product by id. The id is passed to the store as-is.
    pub async fn get_by_id(&self, id: &str) -> InventoryResult<Product> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
    }

    /// Adds a signed `quantity` to the product's stock and returns the
    /// updated product.
    pub async fn adjust(&self, product_id: &str, quantity: i64) -> InventoryResult<Product> {
        match self.store.adjust_inventory(product_id, quantity).await? {
            StockAdjustment::Applied(product) => {
                info!(
                    product_id = %product.id,
                    quantity,
                    inventory_count = product.inventory_count,
                    "Inventory adjusted"
                );
                Ok(product)
            }
            StockAdjustment::NotFound => Err(CoreError::ProductNotFound(product_id.to_string()).into()),
            StockAdjustment::Rejected { available } => {
                Err(refusal(product_id, available, quantity, apply_delta(product_id, available, quantity)).into())
            }
        }
    }

    /// Takes `quantity` units out of stock (legacy contract).
    pub async fn consume(&self, product_id: &str, quantity: i64) -> InventoryResult<()> {
        let delta = quantity.checked_neg().ok_or_else(|| CoreError::InventoryOverflow {
            product_id: product_id.to_string(),
            max: MAX_INVENTORY_COUNT,
        })?;

        match self.store.adjust_inventory(product_id, delta).await? {
            StockAdjustment::Applied(product) => {
                info!(
                    product_id = %product.id,
                    quantity,
                    inventory_count = product.inventory_count,
                    "Inventory consumed"
                );
                Ok(())
            }
            StockAdjustment::NotFound => Err(CoreError::ProductNotFound(product_id.to_string()).into()),
            StockAdjustment::Rejected { available } => {
                Err(refusal(product_id, available, delta, consume(product_id, available, quantity)).into())
            }
        }
    }

    /// Adds a strictly positive `quantity` to stock.
    pub async fn restock(&self, product_id: &str, quantity: i64) -> InventoryResult<Product> {
        if quantity <= 0 {
            return Err(CoreError::from(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            })
            .into());
        }

        self.adjust(product_id, quantity).await
    }

    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}

/// Picks the error for an adjustment the store refused.
///
/// `recheck` is the rule re-evaluated against the count the store saw. If a
/// concurrent write already moved the count so the rule now passes, the
/// direction of the delta decides which bound was hit.
fn refusal(product_id: &str, available: i64, delta: i64, recheck: Result<i64, CoreError>) -> CoreError {
    match recheck {
        Err(e) => e,
        Ok(_) if delta < 0 => CoreError::InsufficientInventory {
            product_id: product_id.to_string(),
            available,
            requested: delta.saturating_neg(),
        },
        Ok(_) => CoreError::InventoryOverflow {
            product_id: product_id.to_string(),
            max: MAX_INVENTORY_COUNT,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
