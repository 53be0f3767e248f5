/// Application routes configuration
use crate::handlers::{get_digest, get_raw_digest, health, AppState};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Dashboard endpoints
        .route("/digest", get(get_digest))
        .route("/digest/raw", get(get_raw_digest))
        .with_state(state)
}
