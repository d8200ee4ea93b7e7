//! Axum integration for the oauth2-session authentication library
//!
//! Provides the auth router (GitHub login, callback, logout), the
//! `load_auth` middleware that resolves the session cookie once per request,
//! and extractors for reading the resolved identity in handlers.

mod config;
mod error;
mod middleware;
mod oauth2;
mod session;

pub use config::AUTH_ROUTE_PREFIX;
pub use error::IntoResponseError;
pub use middleware::load_auth;
pub use oauth2::auth_router;
pub use session::{AuthUser, OptionalAuthUser};

// Re-export the initialization function from the oauth2-session crate
pub use oauth2_session::init;
