//! oauth2_session - GitHub OAuth2 login and server-side sessions
//!
//! This crate provides the authentication core for a web application:
//! the GitHub authorization-code flow, session issuance/validation/rotation
//! backed by a SQLite table, and a procedure caller that dispatches typed
//! server operations with a request-scoped auth context.

mod config;
mod coordination;
mod oauth2;
mod rpc;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, authorize_github_core, logout_core, prepare_github_login_core,
};

pub use oauth2::{AuthResponse, OAUTH2_STATE_COOKIE_NAME, OAuth2Account, OAuth2Error};

pub use rpc::{
    Auth, Context, ErrorCode, ProcedureError, ProtectedContext, call_protected, call_public,
};

pub use session::{
    AuthState, SESSION_COOKIE_NAME, Session, SessionError, authenticate,
    get_session_id_from_headers,
};

pub use storage::data_store_pool;
pub use userdb::{User, UserError};

/// Initialize the storage layer and create the auth tables
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    oauth2::init().await?;
    session::init().await?;
    Ok(())
}
