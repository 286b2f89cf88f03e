//! # HTTP Routes
//!
//! ```text
//! Primary variant                         Legacy variant
//! ───────────────────────────────────     ──────────────────────────────
//! GET  /inventory                         GET  /inventory/:id
//! GET  /inventory/:id                     POST /inventory/update
//! POST /inventory/update
//! POST /inventory/:id/restock
//!
//! Both: GET /health
//! ```
//!
//! Request bodies must be JSON objects. Their fields are read as loose JSON
//! and checked one by one, so a wrong type produces the same error message
//! as a missing field.

pub mod health;
pub mod inventory;
pub mod legacy;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;
use sellhub_core::Product;

/// Success body of an update.
#[derive(Debug, Serialize)]
pub struct UpdateInventoryResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl UpdateInventoryResponse {
    pub const MESSAGE: &'static str = "Inventory updated successfully";

    pub fn with_product(product: Product) -> Self {
        UpdateInventoryResponse {
            message: Self::MESSAGE,
            product: Some(product),
        }
    }

    pub fn without_product() -> Self {
        UpdateInventoryResponse {
            message: Self::MESSAGE,
            product: None,
        }
    }
}

/// Unwraps a request body into its top-level JSON object.
///
/// A body sent without a JSON content type carries no fields, so the field
/// checks report what is missing. Unparseable JSON and any JSON value other
/// than an object (arrays included) are invalid input.
pub(crate) fn object_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    match payload {
        Ok(Json(Value::Object(fields))) => Ok(fields),
        Ok(Json(other)) => {
            debug!(kind = json_kind(&other), "Request body is not a JSON object");
            Err(ApiError::InvalidInput)
        }
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Map::new()),
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Rejected request body");
            Err(ApiError::InvalidInput)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
