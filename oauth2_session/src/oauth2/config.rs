use std::{env, sync::LazyLock};

pub(crate) static OAUTH2_GITHUB_CLIENT_ID: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_GITHUB_CLIENT_ID").expect("OAUTH2_GITHUB_CLIENT_ID must be set")
});

pub(crate) static OAUTH2_GITHUB_CLIENT_SECRET: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_GITHUB_CLIENT_SECRET").expect("OAUTH2_GITHUB_CLIENT_SECRET must be set")
});

/// Optional; GitHub falls back to the app's registered callback URL
pub(crate) static OAUTH2_REDIRECT_URI: LazyLock<Option<String>> =
    LazyLock::new(|| env::var("OAUTH2_REDIRECT_URI").ok());

pub(crate) static OAUTH2_AUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_AUTH_URL")
        .unwrap_or_else(|_| "https://github.com/login/oauth/authorize".to_string())
});

pub(crate) static OAUTH2_TOKEN_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_TOKEN_URL")
        .unwrap_or_else(|_| "https://github.com/login/oauth/access_token".to_string())
});

pub(crate) static OAUTH2_USERINFO_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_USERINFO_URL").unwrap_or_else(|_| "https://api.github.com/user".to_string())
});

pub(crate) static OAUTH2_USER_EMAILS_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH2_USER_EMAILS_URL")
        .unwrap_or_else(|_| "https://api.github.com/user/emails".to_string())
});

pub(crate) const OAUTH2_SCOPE: &str = "user:email";

/// Fixed name binding the CSRF state between login initiation and callback
pub const OAUTH2_STATE_COOKIE_NAME: &str = "github_oauth_state";

pub(crate) const OAUTH2_STATE_COOKIE_MAX_AGE: u64 = 600;

pub(crate) const PROVIDER_GITHUB: &str = "github";
