//! Authentication flow coordination
//!
//! High-level functions that tie the oauth2, session, and userdb modules
//! together into the three operations a web frontend needs: start a GitHub
//! login, complete the callback, and log out. These are the entry points
//! the HTTP layer calls.

mod errors;
mod oauth2;

pub use errors::CoordinationError;
pub use oauth2::{authorize_github_core, logout_core, prepare_github_login_core};
