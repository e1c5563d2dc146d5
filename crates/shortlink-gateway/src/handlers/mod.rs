mod shortlink;

use crate::model::HealthResponse;
use axum::Json;

pub use shortlink::{info_handler, redirect_handler, shorten_handler};

/// Liveness only; the store is not consulted.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::OK)
}
