//! Add-to-cart merge logic.
//!
//! A product already in the cart is bumped without touching the catalog.
//! Anything else is looked up and appended with quantity 1 at its current
//! menu price.

use thiserror::Error;

use cardapio_core::{Cart, CartProductId};

use crate::db::{Catalog, RepositoryError};

/// What `add_to_cart` did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// An existing line's quantity went up by one.
    Incremented,
    /// A new line was appended.
    Appended,
}

/// Errors adding a product to a cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// No product has the requested id.
    #[error("product {0} not found")]
    NotFound(CartProductId),

    /// The catalog could not be read.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// Add one unit of `product_id` to `cart`.
///
/// The id is handed to the catalog exactly as received. On error the cart is
/// left as it was.
///
/// # Errors
///
/// Returns `CartError::NotFound` if the catalog has no such product and
/// `CartError::Store` if the lookup fails.
pub async fn add_to_cart(
    cart: &mut Cart,
    product_id: &str,
    catalog: &dyn Catalog,
) -> Result<AddOutcome, CartError> {
    let id = CartProductId::new(product_id);
    if cart.increment(&id) {
        return Ok(AddOutcome::Incremented);
    }

    let product = catalog
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| CartError::NotFound(id.clone()))?;

    cart.add(id, product.name, product.price);
    Ok(AddOutcome::Appended)
}
