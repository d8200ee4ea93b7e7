mod config;
mod errors;
mod main;
mod storage;
mod types;

pub use config::SESSION_COOKIE_NAME;
pub use errors::SessionError;
pub use main::{authenticate, get_session_id_from_headers};
pub use types::{AuthState, Session};

pub(crate) use main::{
    append_set_cookie, build_blank_session_cookie, build_session_cookie, build_state_cookie,
    get_cookie_from_headers,
};
pub(crate) use storage::SessionStore;

pub(crate) async fn init() -> Result<(), SessionError> {
    SessionStore::init().await
}
