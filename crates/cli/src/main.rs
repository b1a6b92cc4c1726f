//! Cardápio CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the produtos and session tables
//! cardapio-cli migrate
//!
//! # Insert the sample menu (skipped if products already exist)
//! cardapio-cli seed
//!
//! # Insert the sample menu even if the catalog is not empty
//! cardapio-cli seed --force
//! ```
//!
//! # Environment Variables
//!
//! - `CARDAPIO_DATABASE_URL` - `MySQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cardapio-cli")]
#[command(author, version, about = "Cardápio CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations (catalog and sessions)
    Migrate,
    /// Insert the sample menu into the catalog
    Seed {
        /// Insert even if the catalog already has products
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => commands::seed::sample_menu(force).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_force_flag() {
        let cli = Cli::try_parse_from(["cardapio-cli", "seed", "--force"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Seed { force: true })
        ));
    }
}
