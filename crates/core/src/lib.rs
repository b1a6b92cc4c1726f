//! Cardápio Core - Shared domain types.
//!
//! This crate provides the types used across all Cardápio components:
//! - `storefront` - Public menu, cart, checkout and the product admin pages
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP. Looking products up in the catalog is the storefront's
//! job; the [`Cart`] here only knows how to merge lines.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices and the session cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
