// src/routes/mod.rs
pub mod ask;

use std::path::Path;

use crate::state::SharedState;
use ask::{ask_handler, test_api_handler};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the app router. Anything not matched by a route is served from
/// `static_dir`, so `GET /` returns its `index.html`.
pub fn create_router(static_dir: impl AsRef<Path>) -> Router<SharedState> {
    Router::new()
        .route("/ask", post(ask_handler))
        .route("/test-api", get(test_api_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}
