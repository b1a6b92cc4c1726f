//! Seed the catalog with the sample menu.

use cardapio_storefront::db::{self, Catalog, MySqlCatalog, seed};
use tracing::info;

use super::{CommandError, database_url};

/// Insert the sample menu.
///
/// # Arguments
///
/// * `force` - Insert even if the catalog already has products
///
/// # Errors
///
/// Returns an error if the database URL is missing or a query fails.
pub async fn sample_menu(force: bool) -> Result<(), CommandError> {
    let database_url = database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let catalog = MySqlCatalog::new(pool.clone());
    let existing = catalog.list_all().await?.len();
    if existing > 0 && !force {
        info!(existing, "Catalog already has products, skipping (use --force)");
        pool.close().await;
        return Ok(());
    }

    for input in seed::sample_menu() {
        let id = catalog.insert(&input).await?;
        info!(product_id = %id, name = %input.name, "Inserted product");
    }

    pool.close().await;
    info!("Seeding complete");
    Ok(())
}
