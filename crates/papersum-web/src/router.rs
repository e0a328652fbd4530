//! Axum router: maps URL paths to handlers.

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{health::health, summarize::summarize_paper};
use crate::state::{AppState, SharedState};

/// Headers browsers may send on the summarization call.
pub const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    header::CONTENT_TYPE,
];

/// Any origin, the standard client headers. OPTIONS preflights are answered
/// here without reaching a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
}

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/summarize-paper", post(summarize_paper))
        .route("/api/summarize",   post(summarize_paper))
        .route("/health",          get(health))

        // Middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
