//! Database migration command.
//!
//! Applies the SQL migrations in `crates/storefront/migrations/` and creates
//! the tower-sessions table used by the `mysql` session store.

use cardapio_storefront::db;
use tower_sessions_sqlx_store::MySqlStore;

use super::{CommandError, database_url};

/// Run all migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails or
/// a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running catalog migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    tracing::info!("Creating session table...");
    MySqlStore::new(pool.clone()).migrate().await?;

    pool.close().await;
    tracing::info!("Migrations complete!");
    Ok(())
}
