use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::chat::handle_message;
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /chat` - answer one message
///
/// Returns 400 `{"error": "No message provided"}` when `message` is missing,
/// null or empty. Store failures are logged and never change the response.
pub async fn chat_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let reply = handle_message(request.message, &state.deps).await?;

    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}
