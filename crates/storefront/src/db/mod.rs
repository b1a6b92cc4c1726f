//! Catalog storage.
//!
//! # Database: `cardapio`
//!
//! ## Tables
//!
//! - `produtos` - Menu products (`id`, `nome`, `descricao`, `preco`, `imagem`)
//! - `tower_sessions.session` - Tower-sessions storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p cardapio-cli -- migrate
//! ```
//!
//! # Backends
//!
//! Handlers only see the [`Catalog`] trait. [`MySqlCatalog`] is the real
//! store; [`MemoryCatalog`] keeps everything in process for local runs
//! without a database and for tests.

pub mod memory;
pub mod products;
pub mod seed;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;

use cardapio_core::ProductId;

use crate::models::{Product, ProductInput};

pub use memory::MemoryCatalog;
pub use products::MySqlCatalog;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The store refused the submitted values.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Access to the product catalog.
///
/// Ids are taken as the raw text from the request path or form and handed to
/// the store unvalidated. Every `Product` returned has its price normalized.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All products, in id order.
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// One product, or `None` if no product has this id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;

    /// Insert a product and return its new id.
    async fn insert(&self, input: &ProductInput) -> Result<ProductId, RepositoryError>;

    /// Overwrite a product. Unknown ids are not an error.
    async fn update_by_id(&self, id: &str, input: &ProductInput) -> Result<(), RepositoryError>;

    /// Delete a product. Unknown ids are not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `MySQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `MySQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
