//! Session-related types.
//!
//! A session starts on the visitor's first page view, stamped with
//! `STARTED_AT`. The only other thing kept in it is the visitor's cart,
//! serialized as a `cardapio_core::Cart`.

/// Session keys.
pub mod keys {
    /// Key for when the session was started (UTC timestamp).
    pub const STARTED_AT: &str = "started_at";

    /// Key for the visitor's cart.
    pub const CART: &str = "cart";
}
