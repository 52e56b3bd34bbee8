use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::chat::{self, ChatResponse};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
}

/// POST /api/chat — run the extraction pipeline for one user message.
///
/// The `Result` extractor keeps body problems in our hands: a malformed or
/// non-JSON body becomes a 400 instead of axum's default rejection.
pub async fn api_chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) =
        body.map_err(|e| ApiError::Validation(format!("invalid JSON body: {e}")))?;

    let message = body.message.trim();
    if message.is_empty() {
        return Err(ApiError::Validation("empty message".to_string()));
    }

    // Log size only — the message itself may contain personal details.
    info!(chars = message.len(), "chat message received");

    Ok(Json(chat::handle_message(&state, message).await))
}

/// GET /health
pub async fn api_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
