//! Cart route handlers.
//!
//! The cart lives in the visitor's session under `session_keys::CART` and is
//! loaded, changed and written back whole on every add. Two requests racing
//! on one session are last-write-wins.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use cardapio_core::{Cart, CartLine};

use crate::error::{Result, add_breadcrumb};
use crate::extract::{FormOrJson, string_or_number};
use crate::filters;
use crate::models::session_keys;
use crate::routes::found;
use crate::services::add_to_cart;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price.display(),
            line_price: line.total().display(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().display(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, or an empty cart if there is none yet.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
///
/// JSON clients may send `produtoId` as a number.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    #[serde(default, rename = "produtoId", deserialize_with = "string_or_number")]
    pub product_id: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
}

/// Add one unit of a product to the session cart.
///
/// Redirects back to the menu whether the product was appended or an
/// existing line was incremented. Unknown products answer 404.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    FormOrJson(form): FormOrJson<AddToCartForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    let outcome = add_to_cart(&mut cart, &form.product_id, state.catalog()).await?;
    save_cart(&session, &cart).await?;

    tracing::info!(product_id = %form.product_id, ?outcome, "Added to cart");
    add_breadcrumb(
        "cart",
        "Added product",
        Some(&[("product_id", form.product_id.as_str())]),
    );

    Ok(found("/cardapio"))
}

/// Display the cart.
///
/// A session without a cart (or whose cart can't be read) shows an empty
/// cart rather than an error.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> impl IntoResponse {
    let cart = match session.get::<Cart>(session_keys::CART).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read cart from session: {e}");
            Cart::new()
        }
    };

    CheckoutTemplate {
        cart: CartView::from(&cart),
    }
}

#[cfg(test)]
mod tests {
    use cardapio_core::{CartProductId, Price};

    use super::*;

    #[test]
    fn test_cart_view_from_cart() {
        let mut cart = Cart::new();
        cart.add(CartProductId::new("1"), "Bolo".to_string(), Price::new(25.5));
        cart.add(CartProductId::new("1"), "Bolo".to_string(), Price::new(25.5));

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "R$ 51,00");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items.first().map(|i| i.line_price.as_str()), Some("R$ 51,00"));
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "R$ 0,00");
    }
}
