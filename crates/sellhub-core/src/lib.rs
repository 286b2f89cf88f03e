//! # sellhub-core: Pure Inventory Logic
//!
//! This crate holds every decision the inventory service makes, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sellhub Inventory Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 inventory-api (axum routes)                     │   │
//! │  │    GET /inventory, GET /inventory/:id, POST /inventory/update   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ sellhub-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌───────────┐               │   │
//! │  │   │   types   │  │  inventory  │  │ validation│               │   │
//! │  │   │  Product  │  │ apply_delta │  │ productId │               │   │
//! │  │   │NewProduct │  │   consume   │  │ quantity  │               │   │
//! │  │   └───────────┘  └─────────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  sellhub-db (Database Layer)                    │   │
//! │  │        SQLite queries, migrations, ProductStore implementations │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` entity and its creation input
//! - [`inventory`] - Stock arithmetic under the non-negative invariant
//! - [`error`] - Domain error types
//! - [`validation`] - Request field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use sellhub_core::inventory::apply_delta;
//!
//! // Restock 5 units on top of 5
//! assert_eq!(apply_delta("p1", 5, 5).unwrap(), 10);
//!
//! // Consuming more than is in stock is refused
//! assert!(apply_delta("p1", 2, -5).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// Mirrors the `VARCHAR(255)` column the product table was first defined with.
pub const MAX_PRODUCT_NAME_LEN: usize = 255;

/// Largest inventory count a product may hold.
///
/// The persisted column is a 32-bit integer, so any adjustment that would
/// push the count past this bound is refused instead of being widened.
pub const MAX_INVENTORY_COUNT: i64 = i32::MAX as i64;
