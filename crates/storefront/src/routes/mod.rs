//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Landing page
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (catalog reachable)
//!
//! # Menu
//! GET  /cardapio                      - Product listing
//!
//! # Cart
//! POST /add-to-cart                   - Add one unit (form: produtoId), 302 -> /cardapio
//! GET  /checkout                      - Cart contents
//!
//! # Product admin (no auth)
//! GET  /admin-produtos                - Product list with add/edit forms
//! POST /admin-produtos/adicionar      - Insert product, 302 -> /admin-produtos
//! POST /admin-produtos/editar/{id}    - Update product, 302 -> /admin-produtos
//! GET  /admin-produtos/remover/{id}   - Delete product, 302 -> /admin-produtos
//!
//! # Anything else
//! GET  /*                             - Files from the static directory, or 404
//! ```
//!
//! POST bodies may be urlencoded forms or JSON with the same field names.

pub mod admin_products;
pub mod cart;
pub mod health;
pub mod home;
pub mod menu;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::state::AppState;

/// `302 Found` redirect.
///
/// axum's `Redirect::to` answers `303 See Other`; form posts here answer
/// with a plain `302` like any classic server-rendered site.
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Create the product admin routes router.
pub fn admin_product_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-produtos", get(admin_products::index))
        .route("/admin-produtos/adicionar", post(admin_products::create))
        .route("/admin-produtos/editar/{id}", post(admin_products::update))
        .route("/admin-produtos/remover/{id}", get(admin_products::remove))
}

/// Create the health check routes.
///
/// Kept apart from [`routes`] so probes don't start sessions.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create the page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/cardapio", get(menu::index))
        .route("/add-to-cart", post(cart::add))
        .route("/checkout", get(cart::checkout))
        .merge(admin_product_routes())
}
