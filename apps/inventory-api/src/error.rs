//! # API Error Type
//!
//! Every failure a route can produce, rendered as `{ "error": "<message>" }`.
//!
//! ## Status Mapping
//! ```text
//! ┌──────────────────────────────┬────────┬─────────────────────────────┐
//! │ Source                       │ Status │ Body                        │
//! ├──────────────────────────────┼────────┼─────────────────────────────┤
//! │ productId missing/malformed  │ 400    │ "Invalid productId"         │
//! │ quantity not an integer      │ 400    │ "Invalid input"             │
//! │ CoreError::ProductNotFound   │ 404    │ "Product not found"         │
//! │ CoreError::Insufficient...   │ 400    │ "Insufficient inventory"    │
//! │ DbError (any)                │ 500    │ "Internal server error"     │
//! └──────────────────────────────┴────────┴─────────────────────────────┘
//! ```
//!
//! Internal detail is logged here and never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::service::InventoryError;
use sellhub_core::validation::PRODUCT_ID_FIELD;
use sellhub_core::{CoreError, ValidationError};
use sellhub_db::DbError;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid productId")]
    InvalidProductId,

    #[error("Invalid input")]
    InvalidInput,

    #[error("Product not found")]
    NotFound,

    #[error("Insufficient inventory")]
    InsufficientInventory,

    /// Carries the detail for the log only.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidProductId | ApiError::InvalidInput | ApiError::InsufficientInventory => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }

        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        if err.field() == PRODUCT_ID_FIELD {
            ApiError::InvalidProductId
        } else {
            ApiError::InvalidInput
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::NotFound,
            CoreError::InsufficientInventory { .. } => ApiError::InsufficientInventory,
            CoreError::InventoryOverflow { .. } => ApiError::InvalidInput,
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Core(e) => e.into(),
            InventoryError::Store(e) => e.into(),
        }
    }
}
