//! # Sellhub Inventory API
//!
//! HTTP surface over the product inventory.
//!
//! ## Request Flow
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │  Client  │───►│ axum Router  │───►│ InventoryService │───►│ ProductStore │
//! │          │◄───│ + TraceLayer │◄───│ (rules, logging) │◄───│ SQLite / mem │
//! └──────────┘    └──────────────┘    └──────────────────┘    └──────────────┘
//!                       │
//!                       └── ApiError → { "error": "..." } with status code
//! ```
//!
//! `build_app` is what `main` serves and what the router tests drive.

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ApiVariant, StoreBackend};
pub use error::{ApiError, ApiResult};
pub use service::{InventoryError, InventoryService};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: InventoryService,
}

/// Builds the router for the chosen API variant.
pub fn build_app(service: InventoryService, variant: ApiVariant) -> Router {
    let inventory = match variant {
        ApiVariant::Primary => routes::inventory::router(),
        ApiVariant::Legacy => routes::legacy::router(),
    };

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/inventory", inventory)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}
