use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    model: String,
    stores: Vec<String>,
}

/// Health check endpoint
///
/// Reports the configured model and registered stores. Makes no remote
/// calls, so it never spends API quota.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.deps.ai.model().to_string(),
        stores: state.deps.store_names(),
    })
}
