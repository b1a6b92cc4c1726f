//! Domain models for the storefront.
//!
//! Cart types are shared with other crates and live in `cardapio-core`;
//! what's here only matters to the web layer.

pub mod product;
pub mod session;

pub use product::{Product, ProductInput};
pub use session::keys as session_keys;
