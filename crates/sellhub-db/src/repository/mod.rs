//! # Repository Module
//!
//! SQLite-backed repositories.
//!
//! ```text
//! InventoryService
//!      │  store.adjust_inventory(id, delta)
//!      ▼
//! ProductRepository
//! ├── list_all(&self)
//! ├── get_by_id(&self, id)
//! ├── insert(&self, new_product)
//! └── adjust_inventory(&self, id, delta)
//!      │  SQL
//!      ▼
//! SQLite Database
//! ```
//!
//! - [`ProductRepository`](product::ProductRepository) - Product reads and stock updates

pub mod product;
