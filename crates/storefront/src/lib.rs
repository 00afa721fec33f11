//! Driftwood Supply storefront library.
//!
//! Server-rendered storefront over the Shopify Storefront API:
//!
//! - Axum web framework, Askama templates
//! - `catalog` holds the swatch selection resolver and card composer
//! - `shopify` holds the GraphQL client, wire types, and domain types
//!
//! The router is exposed as [`app`] so integration tests can drive it
//! without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod shopify;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .with_state(state)
}
