//! Sample menu.
//!
//! Loaded into the memory catalog on startup and inserted by
//! `cardapio-cli seed`.

use crate::models::ProductInput;

/// The house menu used for local runs and demo databases.
#[must_use]
pub fn sample_menu() -> Vec<ProductInput> {
    vec![
        ProductInput::new(
            "Bolo de Cenoura",
            "Bolo de cenoura com cobertura de chocolate",
            "25.50",
            "/img/bolo-cenoura.jpg",
        ),
        ProductInput::new(
            "Bolo de Fubá",
            "Bolo de fubá cremoso com goiabada",
            "22.00",
            "/img/bolo-fuba.jpg",
        ),
        ProductInput::new(
            "Torta de Limão",
            "Massa amanteigada, creme de limão e merengue",
            "48.90",
            "/img/torta-limao.jpg",
        ),
        ProductInput::new(
            "Brigadeiro",
            "Unidade, chocolate belga",
            "3.50",
            "/img/brigadeiro.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use cardapio_core::Price;

    use super::*;

    #[test]
    fn test_sample_prices_are_decimals() {
        for product in sample_menu() {
            assert!(Price::parse(&product.price).is_ok(), "{}", product.name);
        }
    }
}
