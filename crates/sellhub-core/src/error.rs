//! # Error Types
//!
//! ```text
//! ValidationError ──► CoreError ──► ApiError (inventory-api) ──► { "error": ... }
//!   which field        which rule     status + message
//! ```
//!
//! `sellhub-db` keeps its own `DbError`; storage failures never pass
//! through `CoreError`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id exists.
    #[error("No product with id {0}")]
    ProductNotFound(String),

    /// The adjustment would leave the product with a negative count.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /inventory/update { quantity: -5 }
    ///      │
    ///      ▼
    /// Stock check: available=2
    ///      │
    ///      ▼
    /// InsufficientInventory { available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// 400 { "error": "Insufficient inventory" }
    /// ```
    #[error("Insufficient inventory for {product_id}: available {available}, requested {requested}")]
    InsufficientInventory {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// The adjustment would push the count past `MAX_INVENTORY_COUNT`.
    #[error("Inventory for {product_id} would exceed {max}")]
    InventoryOverflow { product_id: String, max: i64 },

    /// A request field failed its rule.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Request field failures.
///
/// Every variant names the offending field so callers can choose the
/// response message per field.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing, null or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text longer than the column allows.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero or negative where only additions are allowed.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is numeric but has a fractional part.
    #[error("{field} must be an integer")]
    NotAnInteger { field: String },

    /// Value has the wrong JSON type or shape (e.g. not a UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
