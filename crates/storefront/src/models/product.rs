//! Menu products.

use serde::Deserialize;

use cardapio_core::{Price, ProductId};

use crate::extract::string_or_number;

/// A product on the menu.
///
/// Instances only ever come out of a [`crate::db::Catalog`], so `price` has
/// already been normalized from its stored decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
}

/// Product fields as submitted by the admin forms.
///
/// Every field is kept as the raw form text. Nothing is validated here; the
/// store accepts or rejects the values. JSON bodies may send `preco` as a
/// number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductInput {
    #[serde(default, rename = "nome")]
    pub name: String,
    #[serde(default, rename = "descricao")]
    pub description: String,
    #[serde(default, rename = "preco", deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default, rename = "imagem")]
    pub image: String,
}

impl ProductInput {
    /// Build an input from plain values.
    #[must_use]
    pub fn new(name: &str, description: &str, price: &str, image: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            price: price.to_owned(),
            image: image.to_owned(),
        }
    }
}
