//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /         - Home page (featured collection + recommended products)
//! GET  /health   - Liveness check
//! /static/*      - Hashed CSS and assets
//! ```
//!
//! Product cards link out to `/products/{handle}` and the featured
//! collection to `/collections/{handle}`; those pages live elsewhere.

pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the page routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
