//! Business logic that sits between routes and storage.

pub mod cart;

pub use cart::{AddOutcome, CartError, add_to_cart};
