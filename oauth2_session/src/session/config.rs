use std::{env, sync::LazyLock};

/// Name of the session cookie
///
/// Default: "auth_session"
pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "auth_session".to_string())
});

/// Session lifetime in seconds; also the cookie Max-Age
///
/// Default: 30 days
pub(crate) static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30 * 24 * 60 * 60)
});
