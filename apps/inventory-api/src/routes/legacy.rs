//! Subtract-only inventory routes kept for older clients.
//!
//! Every validation failure on this surface answers "Invalid input", and a
//! successful update does not echo the product back.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use super::{object_body, UpdateInventoryResponse};
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use sellhub_core::validation::{
    validate_legacy_product_id, validate_legacy_quantity, PRODUCT_ID_FIELD, QUANTITY_FIELD,
};
use sellhub_core::Product;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/update", post(update_inventory))
        .route("/:id", get(get_product))
}

/// GET /inventory/:id
async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Product>> {
    let product = state.service.get_by_id(&id).await?;
    Ok(Json(product))
}

/// POST /inventory/update
///
/// `quantity` units are taken out of stock.
async fn update_inventory(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpdateInventoryResponse>> {
    let body = object_body(payload)?;

    let product_id = validate_legacy_product_id(body.get(PRODUCT_ID_FIELD)).map_err(|_| ApiError::InvalidInput)?;
    let quantity = validate_legacy_quantity(body.get(QUANTITY_FIELD)).map_err(|_| ApiError::InvalidInput)?;

    state.service.consume(&product_id, quantity).await?;
    Ok(Json(UpdateInventoryResponse::without_product()))
}
