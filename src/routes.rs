//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check: object store reachability
//! - `GET  /{*path}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(tracing::layer())
}
