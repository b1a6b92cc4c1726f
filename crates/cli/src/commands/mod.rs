//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Errors shared by commands that talk to the database.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] cardapio_storefront::db::RepositoryError),
}

/// Read the catalog database URL from the environment.
///
/// Loads `.env` first, then tries `CARDAPIO_DATABASE_URL` and falls back to
/// `DATABASE_URL`.
fn database_url() -> Result<SecretString, CommandError> {
    dotenvy::dotenv().ok();

    std::env::var("CARDAPIO_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar("CARDAPIO_DATABASE_URL"))
}
