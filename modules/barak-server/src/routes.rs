use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::rest;
use crate::AppState;

/// Build the application router with CORS and request logging.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(rest::api_health))
        // Chat pipeline
        .route("/api/chat", post(rest::api_chat))
        .with_state(state)
        // Permissive CORS: the mobile client calls from any origin.
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency only.
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
