mod config;
mod errors;
mod main;
pub(crate) mod storage;
pub(crate) mod types;

pub use config::OAUTH2_STATE_COOKIE_NAME;
pub use errors::OAuth2Error;
pub use types::{AuthResponse, OAuth2Account};

pub(crate) use config::PROVIDER_GITHUB;
pub(crate) use main::{
    exchange_code_for_token, fetch_github_emails, fetch_github_user, prepare_oauth2_auth_request,
    select_primary_email, verify_callback_state,
};
pub(crate) use storage::OAuth2Store;

pub(crate) async fn init() -> Result<(), OAuth2Error> {
    // Validate required environment variables early
    let _ = *config::OAUTH2_GITHUB_CLIENT_ID;
    let _ = *config::OAUTH2_GITHUB_CLIENT_SECRET;

    // Initialize the OAuth2 database tables
    OAuth2Store::init().await?;

    Ok(())
}
