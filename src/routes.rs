//! Router configuration for the two listeners.
//!
//! # Route Structure
//!
//! Public listener:
//! - `POST /api/v1/links` - Create a deceptive link artifact
//! - `GET  /health`       - Health check
//!
//! Redirect listener:
//! - `GET  /{slug}`       - Prank slug redirect (fail-open)
//!
//! # Middleware
//!
//! Both routers carry structured request/response tracing.

use axum::Router;
use axum::routing::{get, post};

use crate::api::handlers::{create_link_handler, health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the public API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/links", post(create_link_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the redirect router.
pub fn redirect_router(state: AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
