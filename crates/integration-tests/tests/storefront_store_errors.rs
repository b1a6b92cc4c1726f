//! Integration tests for routes whose catalog is unavailable.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use cardapio_core::ProductId;
use cardapio_integration_tests::{TestContext, TestResponse};
use cardapio_storefront::db::{Catalog, RepositoryError};
use cardapio_storefront::models::{Product, ProductInput};

/// Catalog whose every call fails.
struct UnavailableCatalog;

fn unavailable() -> RepositoryError {
    RepositoryError::DataCorruption("catalog unavailable".to_string())
}

#[async_trait]
impl Catalog for UnavailableCatalog {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(unavailable())
    }
    async fn get_by_id(&self, _id: &str) -> Result<Option<Product>, RepositoryError> {
        Err(unavailable())
    }
    async fn insert(&self, _input: &ProductInput) -> Result<ProductId, RepositoryError> {
        Err(unavailable())
    }
    async fn update_by_id(&self, _id: &str, _input: &ProductInput) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
    async fn delete_by_id(&self, _id: &str) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

fn context() -> TestContext {
    TestContext::with_catalog(Arc::new(UnavailableCatalog))
}

fn assert_server_error(resp: &TestResponse) {
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body, "Erro interno do servidor");
}

const PRODUCT_FORM: [(&str, &str); 4] = [
    ("nome", "Bolo"),
    ("descricao", ""),
    ("preco", "25.50"),
    ("imagem", ""),
];

#[tokio::test]
async fn test_menu_store_error() {
    let resp = context().get("/cardapio").await;
    assert_server_error(&resp);
}

#[tokio::test]
async fn test_admin_list_store_error() {
    let resp = context().get("/admin-produtos").await;
    assert_server_error(&resp);
}

#[tokio::test]
async fn test_admin_add_store_error() {
    let resp = context()
        .post_form("/admin-produtos/adicionar", &PRODUCT_FORM)
        .await;
    assert_server_error(&resp);
}

#[tokio::test]
async fn test_admin_edit_store_error() {
    let resp = context()
        .post_form("/admin-produtos/editar/1", &PRODUCT_FORM)
        .await;
    assert_server_error(&resp);
}

#[tokio::test]
async fn test_admin_remove_store_error() {
    let resp = context().get("/admin-produtos/remover/1").await;
    assert_server_error(&resp);
}

#[tokio::test]
async fn test_add_to_cart_store_error() {
    let resp = context().add_to_cart("1").await;
    assert_server_error(&resp);
}

#[tokio::test]
async fn test_store_error_does_not_leave_a_cart_behind() {
    let mut ctx = context();
    ctx.get("/").await;

    let resp = ctx.add_to_cart("1").await;
    assert_server_error(&resp);

    let checkout = ctx.get("/checkout").await;
    assert_eq!(checkout.status, StatusCode::OK);
    assert!(checkout.body.contains("Seu carrinho está vazio"));
}

#[tokio::test]
async fn test_pages_without_catalog_access_still_work() {
    let mut ctx = context();

    assert_eq!(ctx.get("/").await.status, StatusCode::OK);
    assert_eq!(ctx.get("/checkout").await.status, StatusCode::OK);
    assert_eq!(ctx.get("/health").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_unavailable_catalog() {
    let resp = context().get("/health/ready").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
}
