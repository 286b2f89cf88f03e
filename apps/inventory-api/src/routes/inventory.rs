//! Signed-delta inventory routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use super::{object_body, UpdateInventoryResponse};
use crate::error::ApiResult;
use crate::AppState;
use sellhub_core::validation::{
    validate_product_id, validate_quantity, validate_restock_quantity, PRODUCT_ID_FIELD, QUANTITY_FIELD,
};
use sellhub_core::Product;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/update", post(update_inventory))
        .route("/:id", get(get_product))
        .route("/:id/restock", post(restock_product))
}

/// GET /inventory
async fn list_inventory(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.service.list_all().await?;
    Ok(Json(products))
}

/// GET /inventory/:id
async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Product>> {
    let product = state.service.get_by_id(&id).await?;
    Ok(Json(product))
}

/// POST /inventory/update
///
/// `quantity` is a signed delta: positive restocks, negative consumes.
async fn update_inventory(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpdateInventoryResponse>> {
    let body = object_body(payload)?;

    let product_id = validate_product_id(body.get(PRODUCT_ID_FIELD))?;
    let quantity = validate_quantity(body.get(QUANTITY_FIELD))?;

    let product = state.service.adjust(&product_id, quantity).await?;
    Ok(Json(UpdateInventoryResponse::with_product(product)))
}

/// POST /inventory/:id/restock
async fn restock_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpdateInventoryResponse>> {
    let body = object_body(payload)?;

    let product_id = validate_product_id(Some(&Value::String(id)))?;
    let quantity = validate_restock_quantity(body.get(QUANTITY_FIELD))?;

    let product = state.service.restock(&product_id, quantity).await?;
    Ok(Json(UpdateInventoryResponse::with_product(product)))
}
