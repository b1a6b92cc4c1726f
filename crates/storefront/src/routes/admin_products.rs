//! Product admin route handlers.
//!
//! Form (or JSON) posts with a redirect back to the list. The admin pages have
//! no authentication. Form fields go to the catalog as raw text, and any
//! value the store refuses surfaces as a 500.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::instrument;

use crate::error::Result;
use crate::extract::FormOrJson;
use crate::filters;
use crate::models::ProductInput;
use crate::routes::found;
use crate::routes::menu::ProductView;
use crate::state::AppState;

const ADMIN_PRODUCTS_PATH: &str = "/admin-produtos";

/// Product admin list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin_produtos.html")]
pub struct AdminProductsTemplate {
    pub products: Vec<ProductView>,
}

/// Product admin list handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<AdminProductsTemplate> {
    let products = state.catalog().list_all().await?;

    Ok(AdminProductsTemplate {
        products: products.iter().map(ProductView::from).collect(),
    })
}

/// Create product handler.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<ProductInput>,
) -> Result<Response> {
    let id = state.catalog().insert(&input).await?;
    tracing::info!(product_id = %id, "Product inserted");

    Ok(found(ADMIN_PRODUCTS_PATH))
}

/// Update product handler.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormOrJson(input): FormOrJson<ProductInput>,
) -> Result<Response> {
    state.catalog().update_by_id(&id, &input).await?;
    tracing::info!(product_id = %id, "Product updated");

    Ok(found(ADMIN_PRODUCTS_PATH))
}

/// Delete product handler.
///
/// Deleting an id that doesn't exist still redirects.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    state.catalog().delete_by_id(&id).await?;
    tracing::info!(product_id = %id, "Product removed");

    Ok(found(ADMIN_PRODUCTS_PATH))
}
