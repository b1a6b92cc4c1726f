//! Session middleware configuration.
//!
//! Sets up cookie sessions with tower-sessions. The store is whichever one
//! `main` opened: `MySqlStore` for the `mysql` backend, `MemoryStore` for
//! `memory`.
//!
//! tower-sessions only issues a cookie for a session that holds data, so
//! [`start_session`] stamps every new session on the first page view.

use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::{Expiry, Session, SessionManagerLayer, SessionStore};

use crate::config::StorefrontConfig;
use crate::models::session_keys;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "cardapio_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over a session store.
///
/// # Arguments
///
/// * `store` - Session store
/// * `config` - Storefront configuration (for the `Secure` cookie flag)
#[must_use]
pub fn create_session_layer<S>(store: S, config: &StorefrontConfig) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// Middleware that starts a session for visitors who don't have one yet.
///
/// Must run inside the session layer. Store failures are logged and the
/// request continues without a session.
pub async fn start_session(session: Session, request: Request, next: Next) -> Response {
    match session
        .get::<chrono::DateTime<chrono::Utc>>(session_keys::STARTED_AT)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            if let Err(e) = session
                .insert(session_keys::STARTED_AT, chrono::Utc::now())
                .await
            {
                tracing::warn!("Failed to start session: {e}");
            }
        }
        Err(e) => tracing::warn!("Failed to read session: {e}"),
    }

    next.run(request).await
}
