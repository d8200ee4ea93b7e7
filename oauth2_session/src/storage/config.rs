//! Database connection and table configuration

use std::{env, sync::LazyLock};

pub(super) static DATABASE_URL: LazyLock<String> =
    LazyLock::new(|| env::var("DATABASE_URL").expect("DATABASE_URL must be set"));

pub(super) fn database_url() -> &'static str {
    DATABASE_URL.as_str()
}

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_default());

/// User table name
pub(crate) static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "user"))
});

/// Session table name
pub(crate) static DB_TABLE_SESSIONS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_SESSIONS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "session"))
});

/// OAuth2 account table name
pub(crate) static DB_TABLE_OAUTH2_ACCOUNTS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_OAUTH2_ACCOUNTS")
        .unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "oauth2_account"))
});
