//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request spans)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with `MySQL` or memory store)
//! 5. Session start (page routes only, not health checks or static files)

pub mod request_id;
pub mod session;

pub use request_id::request_id_middleware;
pub use session::{SESSION_COOKIE_NAME, create_session_layer, start_session};
