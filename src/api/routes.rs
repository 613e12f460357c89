//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes.
///
/// # Endpoints
///
/// - `GET /health`   - Object store health check
/// - `GET /`         - Empty short code (always 400)
/// - `GET /{*path}`  - Short link redirect
///
/// `/health` is matched before the wildcard, so a record stored as
/// `health.json` is unreachable over HTTP.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/", get(redirect_handler))
        .route("/{*path}", get(redirect_handler))
}
