//! # Product Store
//!
//! The storage capability the service layer is handed at startup. Operations
//! never reach for a global connection; they call whatever `ProductStore`
//! they were given.
//!
//! ## Atomic Adjustment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ❌ read → check → write  (two requests can both pass the check)   │
//! │     SELECT inventory_count ...                                      │
//! │     UPDATE products SET inventory_count = 7 ...                     │
//! │                                                                     │
//! │  ✅ one guarded write, evaluated by the store                      │
//! │     UPDATE products                                                 │
//! │     SET inventory_count = inventory_count + ?delta                  │
//! │     WHERE id = ? AND inventory_count + ?delta BETWEEN 0 AND max     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sellhub_core::Product;

use crate::error::DbResult;

/// Result of an atomic stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockAdjustment {
    /// The guard held and the new count was stored.
    Applied(Product),

    /// No product with that id.
    NotFound,

    /// The guard failed; nothing was written. `available` is the count the
    /// guard was evaluated against.
    Rejected { available: i64 },
}

/// Read and adjust access to the product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every product, in store order.
    async fn list_all(&self) -> DbResult<Vec<Product>>;

    /// A single product, `None` if absent.
    async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>>;

    /// Adds `delta` to the product's count if the result stays within
    /// `0..=MAX_INVENTORY_COUNT`, as one atomic operation.
    async fn adjust_inventory(&self, id: &str, delta: i64) -> DbResult<StockAdjustment>;

    /// Whether the store can currently serve requests.
    async fn health_check(&self) -> bool;
}
