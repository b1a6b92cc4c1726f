//! Cardápio Storefront - Menu, cart and product admin.
//!
//! This binary serves the whole site on port 3010.
//!
//! # Architecture
//!
//! - Axum web framework, plain HTML forms
//! - Askama templates for server-side rendering
//! - `MySQL` `produtos` table for the catalog
//! - tower-sessions for the per-visitor cart
//!
//! With `CARDAPIO_STORE=memory` the catalog and sessions are kept in process
//! and the catalog starts with the sample menu.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::Router;
use sentry::integrations::tracing as sentry_tracing;
use tower_sessions::MemoryStore;
use tower_sessions_sqlx_store::MySqlStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardapio_storefront::config::{StoreConfig, StorefrontConfig};
use cardapio_storefront::db::{self, MemoryCatalog, MySqlCatalog, seed::sample_menu};
use cardapio_storefront::state::AppState;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cardapio_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    match &config.store {
        StoreConfig::MySql { database_url } => {
            let pool = db::create_pool(database_url)
                .await
                .expect("Failed to create database pool");
            tracing::info!("Database pool created");

            // NOTE: Migrations are NOT run automatically on startup.
            // Run them explicitly via: cargo run -p cardapio-cli -- migrate

            let catalog = Arc::new(MySqlCatalog::new(pool.clone()));
            let state = AppState::new(config.clone(), catalog);
            let app = cardapio_storefront::app(state, MySqlStore::new(pool.clone()));

            serve(&config, app).await;

            pool.close().await;
            tracing::info!("Database pool closed");
        }
        StoreConfig::Memory => {
            let catalog = MemoryCatalog::with_products(&sample_menu())
                .expect("Failed to load sample menu");
            tracing::warn!("Using in-memory store, products and carts are lost on restart");

            let state = AppState::new(config.clone(), Arc::new(catalog));
            let app = cardapio_storefront::app(state, MemoryStore::default());

            serve(&config, app).await;
        }
    }
}

/// Bind the listener and serve until a shutdown signal arrives.
async fn serve(config: &StorefrontConfig, app: Router) {
    // Sentry layers (outermost for full request coverage)
    let app = app
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
