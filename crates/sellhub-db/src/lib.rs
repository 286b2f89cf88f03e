//! # sellhub-db: Database Layer for the Inventory Service
//!
//! Storage for products, using SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sellhub Inventory Data Flow                         │
//! │                                                                         │
//! │  InventoryService (inventory-api)                                      │
//! │       │  Arc<dyn ProductStore>                                          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   sellhub-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ ProductStore  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (store.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_create_  │  │   │
//! │  │   │               │    │ MemoryStore   │    │  products    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - The `ProductStore` capability handed to the service layer
//! - [`repository`] - SQLite `ProductStore` implementation
//! - [`memory`] - In-memory `ProductStore` implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sellhub_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::new("./data/inventory.db")).await?;
//! let products = db.products().list_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use memory::MemoryProductStore;
pub use pool::{Database, DbConfig, DbLocation};
pub use repository::product::ProductRepository;
pub use store::{ProductStore, StockAdjustment};
