//! # Domain Types
//!
//! The inventory service tracks exactly one entity.
//!
//! ```text
//! ┌─────────────────────────────┐
//! │          Product            │
//! │  ─────────────────────────  │
//! │  id (UUID, immutable)       │
//! │  name (1-255 chars)         │
//! │  inventory_count (>= 0)     │
//! └─────────────────────────────┘
//! ```
//!
//! Products are created by the seeder only; the API reads them and moves
//! `inventory_count`, nothing else.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product whose stock is tracked.
///
/// Serialized as `{ "id", "name", "inventoryCount" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4, hyphenated).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Units currently in stock. Never negative.
    pub inventory_count: i64,
}

// =============================================================================
// New Product
// =============================================================================

/// Input for creating a product. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub inventory_count: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, inventory_count: i64) -> Self {
        NewProduct {
            name: name.into(),
            inventory_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: "aa322176-6c45-4b07-8df3-00359366d2b4".to_string(),
            name: "Product 1".to_string(),
            inventory_count: 5,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "aa322176-6c45-4b07-8df3-00359366d2b4",
                "name": "Product 1",
                "inventoryCount": 5,
            })
        );
    }
}
