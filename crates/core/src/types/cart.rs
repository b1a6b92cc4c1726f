//! The session cart.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s with at most one line per
//! product. It is serialized into the visitor's session and never written
//! anywhere else.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::price::Price;

/// Product identifier as carried by a cart line.
///
/// Ids arrive as untyped form text (`produtoId=1`). They are compared as
/// strings after trimming surrounding whitespace, so `"1"` and `" 1 "` name
/// the same line while `"01"` does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartProductId(String);

impl CartProductId {
    /// Normalize a raw identifier.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }

    /// Get the normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One product and how many of it the visitor wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the whole line.
    #[must_use]
    pub fn total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line for a product.
    #[must_use]
    pub fn find(&self, id: &CartProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Bump the quantity of an existing line.
    ///
    /// Returns `false` (and leaves the cart alone) if the product has no line.
    pub fn increment(&mut self, id: &CartProductId) -> bool {
        match self.lines.iter_mut().find(|line| &line.id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Add one unit of a product.
    ///
    /// Appends a new line with quantity 1, or increments the existing line
    /// if the product is already in the cart.
    pub fn add(&mut self, id: CartProductId, name: String, price: Price) {
        if !self.increment(&id) {
            self.lines.push(CartLine {
                id,
                name,
                price,
                quantity: 1,
            });
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn bolo() -> (CartProductId, String, Price) {
        (CartProductId::new("1"), "Bolo".to_string(), Price::new(25.5))
    }

    #[test]
    fn test_add_appends_new_line_with_quantity_one() {
        let mut cart = Cart::new();
        let (id, name, price) = bolo();
        cart.add(id.clone(), name, price);

        assert_eq!(cart.lines().len(), 1);
        let line = cart.find(&id).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Bolo");
        assert_eq!(line.price, Price::new(25.5));
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let mut cart = Cart::new();
        let (id, name, price) = bolo();
        cart.add(id.clone(), name.clone(), price);
        cart.add(id.clone(), name, price);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.find(&id).unwrap().quantity, 2);
    }

    #[test]
    fn test_increment_missing_line_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.increment(&CartProductId::new("9")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_ids_compare_after_trimming() {
        assert_eq!(CartProductId::new(" 1 "), CartProductId::new("1"));
        assert_ne!(CartProductId::new("01"), CartProductId::new("1"));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(CartProductId::new("2"), "Torta".to_string(), Price::new(40.0));
        cart.add(CartProductId::new("1"), "Bolo".to_string(), Price::new(25.5));
        cart.add(CartProductId::new("2"), "Torta".to_string(), Price::new(40.0));

        assert_eq!(cart.lines()[0].id.as_str(), "2");
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].id.as_str(), "1");
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        let (id, name, price) = bolo();
        cart.add(id.clone(), name.clone(), price);
        cart.add(id, name, price);
        cart.add(CartProductId::new("2"), "Brigadeiro".to_string(), Price::new(2.5));

        assert_eq!(cart.item_count(), 3);
        assert!((cart.subtotal().amount() - 53.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_session_round_trip_shape() {
        let mut cart = Cart::new();
        let (id, name, price) = bolo();
        cart.add(id, name, price);

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "id": "1", "name": "Bolo", "price": 25.5, "quantity": 1 }])
        );
    }
}
