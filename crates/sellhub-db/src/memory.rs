//! # In-Memory Product Store
//!
//! A `ProductStore` kept in process memory. Used by service tests and by
//! `STORE_BACKEND=memory` for running the API without a database file.
//!
//! The whole adjustment runs under one write lock, which gives it the same
//! atomicity as the guarded SQL update.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::product::generate_product_id;
use crate::store::{ProductStore, StockAdjustment};
use sellhub_core::inventory::apply_delta;
use sellhub_core::validation::{validate_inventory_count, validate_product_name};
use sellhub_core::{NewProduct, Product};

/// Products held in insertion order.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding exactly `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        MemoryProductStore {
            products: RwLock::new(products),
        }
    }

    /// Inserts a new product with a freshly generated id.
    pub async fn insert(&self, new_product: &NewProduct) -> DbResult<Product> {
        validate_product_name(&new_product.name)
            .and_then(|_| validate_inventory_count(new_product.inventory_count))
            .map_err(|e| DbError::InvalidData(e.to_string()))?;

        let product = Product {
            id: generate_product_id(),
            name: new_product.name.trim().to_string(),
            inventory_count: new_product.inventory_count,
        };

        self.products.write().await.push(product.clone());
        Ok(product)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_all(&self) -> DbResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        Ok(self.products.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn adjust_inventory(&self, id: &str, delta: i64) -> DbResult<StockAdjustment> {
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(StockAdjustment::NotFound);
        };

        match apply_delta(id, product.inventory_count, delta) {
            Ok(new_count) => {
                product.inventory_count = new_count;
                Ok(StockAdjustment::Applied(product.clone()))
            }
            Err(e) => {
                debug!(id = %id, error = %e, "Stock adjustment refused");
                Ok(StockAdjustment::Rejected {
                    available: product.inventory_count,
                })
            }
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_adjust_and_reject() {
        let store = MemoryProductStore::new();
        let p = store.insert(&NewProduct::new("Product 3", 2)).await.unwrap();

        assert_eq!(
            store.adjust_inventory(&p.id, -5).await.unwrap(),
            StockAdjustment::Rejected { available: 2 }
        );
        assert!(matches!(
            store.adjust_inventory(&p.id, 3).await.unwrap(),
            StockAdjustment::Applied(ref updated) if updated.inventory_count == 5
        ));
        assert_eq!(
            store.adjust_inventory("missing", 1).await.unwrap(),
            StockAdjustment::NotFound
        );
    }

    #[tokio::test]
    async fn test_concurrent_consumption_never_oversells() {
        let store = Arc::new(MemoryProductStore::new());
        let p = store.insert(&NewProduct::new("Product 1", 10)).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..25 {
            let store = store.clone();
            let id = p.id.clone();
            handles.push(tokio::spawn(async move {
                store.adjust_inventory(&id, -1).await.unwrap()
            }));
        }

        let mut applied = 0;
        for handle in handles {
            if let StockAdjustment::Applied(_) = handle.await.unwrap() {
                applied += 1;
            }
        }

        assert_eq!(applied, 10);
        let remaining = store.get_by_id(&p.id).await.unwrap().unwrap();
        assert_eq!(remaining.inventory_count, 0);
    }
}
