//! Menu (cardápio) route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Formatted for display, e.g. `R$ 25,50`.
    pub price_display: String,
    /// Formatted for form inputs, e.g. `25.50`.
    pub price_input: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            price_display: product.price.display(),
            price_input: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "cardapio.html")]
pub struct MenuTemplate {
    pub products: Vec<ProductView>,
}

/// Display the menu.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<MenuTemplate> {
    let products = state.catalog().list_all().await?;

    Ok(MenuTemplate {
        products: products.iter().map(ProductView::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use cardapio_core::{Price, ProductId};

    use super::*;

    #[test]
    fn test_product_view_formats_price() {
        let product = Product {
            id: ProductId::new(1),
            name: "Bolo".to_string(),
            description: "Bolo de cenoura".to_string(),
            price: Price::new(25.5),
            image: String::new(),
        };

        let view = ProductView::from(&product);
        assert_eq!(view.id, "1");
        assert!((view.price - 25.5).abs() < f64::EPSILON);
        assert_eq!(view.price_display, "R$ 25,50");
        assert_eq!(view.price_input, "25.50");
    }
}
