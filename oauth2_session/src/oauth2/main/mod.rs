mod core;
mod github;

pub(crate) use core::{prepare_oauth2_auth_request, verify_callback_state};
pub(crate) use github::{
    exchange_code_for_token, fetch_github_emails, fetch_github_user, select_primary_email,
};
