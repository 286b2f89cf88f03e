//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Listing and point lookups
//! - Guarded stock adjustment in a single statement
//! - Inserts (seeding only)

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::store::{ProductStore, StockAdjustment};
use sellhub_core::validation::{validate_inventory_count, validate_product_name};
use sellhub_core::{NewProduct, Product, MAX_INVENTORY_COUNT};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, inventory_count
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, inventory_count
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product with a freshly generated id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored product
    /// * `Err(DbError::InvalidData)` - Name or count out of bounds
    pub async fn insert(&self, new_product: &NewProduct) -> DbResult<Product> {
        validate_product_name(&new_product.name)
            .and_then(|_| validate_inventory_count(new_product.inventory_count))
            .map_err(|e| DbError::InvalidData(e.to_string()))?;

        let product = Product {
            id: generate_product_id(),
            name: new_product.name.trim().to_string(),
            inventory_count: new_product.inventory_count,
        };

        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, inventory_count)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.inventory_count)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Adds `delta` to the stock of product `id` in one guarded statement.
    ///
    /// ## How It Works
    /// The `WHERE` clause carries the non-negative (and upper bound) guard,
    /// so SQLite evaluates check and write under the same write lock.
    /// When no row is updated, a follow-up read distinguishes a missing
    /// product from a refused adjustment.
    ///
    /// ## Arguments
    /// * `id` - Product ID
    /// * `delta` - Change in stock (negative to consume, positive to restock)
    pub async fn adjust_inventory(&self, id: &str, delta: i64) -> DbResult<StockAdjustment> {
        debug!(id = %id, delta = %delta, "Adjusting stock");

        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET inventory_count = inventory_count + ?2
            WHERE id = ?1
              AND inventory_count + ?2 BETWEEN 0 AND ?3
            RETURNING id, name, inventory_count
            "#,
        )
        .bind(id)
        .bind(delta)
        .bind(MAX_INVENTORY_COUNT)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(product) = updated {
            return Ok(StockAdjustment::Applied(product));
        }

        match self.get_by_id(id).await? {
            None => Ok(StockAdjustment::NotFound),
            Some(current) => {
                debug!(
                    id = %id,
                    available = current.inventory_count,
                    delta = %delta,
                    "Stock adjustment refused"
                );
                Ok(StockAdjustment::Rejected {
                    available: current.inventory_count,
                })
            }
        }
    }

    /// True when a trivial query succeeds on the pool.
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list_all(&self) -> DbResult<Vec<Product>> {
        ProductRepository::list_all(self).await
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        ProductRepository::get_by_id(self, id).await
    }

    async fn adjust_inventory(&self, id: &str, delta: i64) -> DbResult<StockAdjustment> {
        ProductRepository::adjust_inventory(self, id, delta).await
    }

    async fn health_check(&self) -> bool {
        self.ping().await
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn seeded() -> (ProductRepository, Vec<Product>) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let mut products = Vec::new();
        for (name, count) in [("Product 1", 5), ("Product 2", 10), ("Product 3", 2)] {
            products.push(repo.insert(&NewProduct::new(name, count)).await.unwrap());
        }

        (repo, products)
    }

    #[tokio::test]
    async fn test_list_all_returns_stored_set() {
        let (repo, products) = seeded().await;

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed, products);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.products().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (repo, products) = seeded().await;

        let found = repo.get_by_id(&products[1].id).await.unwrap();
        assert_eq!(found.as_ref(), Some(&products[1]));

        assert!(repo.get_by_id("123").await.unwrap().is_none());
        assert!(repo.get_by_id(&generate_product_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_adjust_inventory_restock_then_consume() {
        let (repo, products) = seeded().await;
        let id = &products[0].id;

        let restocked = repo.adjust_inventory(id, 5).await.unwrap();
        assert!(matches!(&restocked, StockAdjustment::Applied(p) if p.inventory_count == 10));

        let consumed = repo.adjust_inventory(id, -5).await.unwrap();
        assert!(matches!(&consumed, StockAdjustment::Applied(p) if p.inventory_count == 5));
    }

    #[tokio::test]
    async fn test_adjust_inventory_refuses_negative() {
        let (repo, products) = seeded().await;
        let id = &products[2].id;

        let result = repo.adjust_inventory(id, -5).await.unwrap();
        assert_eq!(result, StockAdjustment::Rejected { available: 2 });

        let unchanged = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(unchanged.inventory_count, 2);
    }

    #[tokio::test]
    async fn test_adjust_inventory_refuses_overflow() {
        let (repo, products) = seeded().await;

        let result = repo
            .adjust_inventory(&products[1].id, MAX_INVENTORY_COUNT)
            .await
            .unwrap();
        assert_eq!(result, StockAdjustment::Rejected { available: 10 });
    }

    #[tokio::test]
    async fn test_adjust_inventory_unknown_product() {
        let (repo, _) = seeded().await;

        let result = repo.adjust_inventory(&generate_product_id(), 1).await.unwrap();
        assert_eq!(result, StockAdjustment::NotFound);
    }

    #[tokio::test]
    async fn test_negative_count_blocked_by_schema() {
        let (repo, products) = seeded().await;

        let err = sqlx::query("UPDATE products SET inventory_count = -1 WHERE id = ?1")
            .bind(&products[0].id)
            .execute(&repo.pool)
            .await
            .map_err(DbError::from)
            .unwrap_err();
        assert!(matches!(err, DbError::Constraint(ref msg) if msg.contains("CHECK")));
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_product() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        assert!(matches!(
            repo.insert(&NewProduct::new("", 1)).await,
            Err(DbError::InvalidData(_))
        ));
        assert!(matches!(
            repo.insert(&NewProduct::new("Product", -1)).await,
            Err(DbError::InvalidData(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_consumption_on_file_database() {
        let dir = std::env::temp_dir().join(format!("sellhub-db-{}", generate_product_id()));
        std::fs::create_dir_all(&dir).unwrap();

        let db = Database::new(DbConfig::new(dir.join("inventory.db")).max_connections(5))
            .await
            .unwrap();
        let repo = db.products();
        let product = repo.insert(&NewProduct::new("Product 2", 10)).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let repo = repo.clone();
            let id = product.id.clone();
            handles.push(tokio::spawn(async move { repo.adjust_inventory(&id, -1).await }));
        }

        let (mut applied, mut rejected) = (0, 0);
        for handle in handles {
            match handle.await.unwrap().unwrap() {
                StockAdjustment::Applied(_) => applied += 1,
                StockAdjustment::Rejected { .. } => rejected += 1,
                StockAdjustment::NotFound => panic!("product vanished"),
            }
        }

        assert_eq!(applied, 10);
        assert_eq!(rejected, 40);
        assert_eq!(repo.get_by_id(&product.id).await.unwrap().unwrap().inventory_count, 0);

        db.close().await;
        std::fs::remove_dir_all(&dir).ok();
    }
}
