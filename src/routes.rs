//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check (unversioned)
//! - `/api/*`        - Versioned REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Versioning** - Per route group, see [`crate::api::versioning`]
//!
//! Trailing-slash normalization is applied around the finished router in
//! [`crate::server`], since it has to run before routing.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes(state.clone()))
        .with_state(state)
        .layer(tracing::layer())
}
