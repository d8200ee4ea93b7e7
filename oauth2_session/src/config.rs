//! Central configuration for the oauth2_session crate

use std::sync::LazyLock;

/// Deployment environment, `development` or `production`
///
/// Gates the `Secure` cookie attribute and the artificial procedure delay.
/// Default: "development"
pub(crate) static APP_ENV: LazyLock<String> =
    LazyLock::new(|| std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()));

pub(crate) static IS_PRODUCTION: LazyLock<bool> = LazyLock::new(|| APP_ENV.as_str() == "production");
