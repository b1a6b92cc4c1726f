//! Cardápio storefront library.
//!
//! The menu, session cart, checkout page and product admin for a small
//! bakery, served with axum. The binary in `main.rs` opens the stores and
//! calls [`app`]; tests build the same router around in-memory stores.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, body::Body, http::Request};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::SessionStore;

use state::AppState;

/// Build the storefront router.
///
/// # Arguments
///
/// * `state` - Shared state holding the catalog handle
/// * `session_store` - Where session data (the cart) is kept
pub fn app<S>(state: AppState, session_store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = middleware::create_session_layer(session_store, state.config());
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .merge(routes::routes().route_layer(axum::middleware::from_fn(
            middleware::start_session,
        )))
        .merge(routes::health_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
