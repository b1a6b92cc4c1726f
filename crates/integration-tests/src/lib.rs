//! Integration tests for Cardápio.
//!
//! Tests drive the full storefront router in process: the same `app()` the
//! binary serves, built over a `MemoryCatalog` and a tower-sessions
//! `MemoryStore`. No database or running server is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cardapio-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Menu, add-to-cart and checkout
//! - `storefront_admin` - Product admin CRUD
//! - `storefront_ops` - Health checks, static files, sessions, request ids
//! - `storefront_store_errors` - Every catalog route over a failing catalog

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use cardapio_storefront::config::{StoreConfig, StorefrontConfig};
use cardapio_storefront::db::{Catalog, MemoryCatalog};
use cardapio_storefront::middleware::SESSION_COOKIE_NAME;
use cardapio_storefront::models::ProductInput;
use cardapio_storefront::state::AppState;

/// Configuration used by every test app.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        store: StoreConfig::Memory,
        host: [127, 0, 0, 1].into(),
        port: 3010,
        base_url: "http://localhost:3010".to_string(),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/public"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// One visitor talking to a fresh storefront.
///
/// Keeps the session cookie between requests the way a browser would.
pub struct TestContext {
    app: Router,
    cookie: Option<String>,
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestContext {
    /// Storefront over a catalog holding `products` (ids assigned from 1).
    #[must_use]
    pub fn new(products: &[ProductInput]) -> Self {
        let catalog = MemoryCatalog::with_products(products).expect("valid test products");
        Self::with_catalog(Arc::new(catalog))
    }

    /// Storefront over any catalog, e.g. one that always fails.
    #[must_use]
    pub fn with_catalog(catalog: Arc<dyn Catalog>) -> Self {
        let state = AppState::new(test_config(), catalog);

        Self {
            app: cardapio_storefront::app(state, MemoryStore::default()),
            cookie: None,
        }
    }

    /// Storefront whose catalog has a single cake: id 1, "Bolo", 25.50.
    #[must_use]
    pub fn with_bolo() -> Self {
        Self::new(&[ProductInput::new(
            "Bolo",
            "Bolo caseiro",
            "25.50",
            "/img/bolo.jpg",
        )])
    }

    /// Forget the session cookie, as a new visitor.
    pub fn clear_cookies(&mut self) {
        self.cookie = None;
    }

    /// Whether the storefront has handed out a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    /// Send a `GET` request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.request(Method::GET, uri).body(Body::empty());
        self.send(request.expect("valid request")).await
    }

    /// Send a urlencoded form `POST`.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let request = self
            .request(Method::POST, uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)));
        self.send(request.expect("valid request")).await
    }

    /// Send a JSON `POST`.
    pub async fn post_json(&mut self, uri: &str, json: &str) -> TestResponse {
        let request = self
            .request(Method::POST, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_owned()));
        self.send(request.expect("valid request")).await
    }

    /// `POST /add-to-cart` with the given `produtoId`.
    pub async fn add_to_cart(&mut self, product_id: &str) -> TestResponse {
        self.post_form("/add-to-cart", &[("produtoId", product_id)])
            .await
    }

    fn request(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        self.remember_cookie(&headers);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn remember_cookie(&mut self, headers: &HeaderMap) {
        let prefix = format!("{SESSION_COOKIE_NAME}=");
        for value in headers.get_all(header::SET_COOKIE) {
            let Ok(value) = value.to_str() else { continue };
            if let Some(pair) = value.split(';').next().filter(|p| p.starts_with(&prefix)) {
                self.cookie = Some(pair.to_string());
            }
        }
    }
}

/// `application/x-www-form-urlencoded` body from key/value pairs.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_form() {
        assert_eq!(
            encode_form(&[("nome", "Bolo de Fubá"), ("preco", "22.00")]),
            "nome=Bolo%20de%20Fub%C3%A1&preco=22.00"
        );
    }
}
