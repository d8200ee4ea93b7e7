//! Shared test initialization
//!
//! Tests that go through the global data store use a file-backed SQLite
//! database named by `.env_test`; the file is removed once per test run so
//! every run starts from an empty database. SQLite functions ensure tables
//! exist at the point of use, so no further setup is needed here.

use std::sync::Once;

pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        // Fallbacks so the config statics resolve even without .env_test
        let defaults = [
            ("DATABASE_URL", "sqlite:/tmp/oauth2_session_test.db"),
            ("OAUTH2_GITHUB_CLIENT_ID", "test-client-id"),
            ("OAUTH2_GITHUB_CLIENT_SECRET", "test-client-secret"),
        ];
        for (key, value) in defaults {
            if std::env::var(key).is_err() {
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }

        if let Some(db_path) = extract_sqlite_file_path() {
            let _ = std::fs::remove_file(&db_path);
        }
    });

    ensure_database_initialized().await;
}

/// File path of the test database, when DATABASE_URL points at a file
fn extract_sqlite_file_path() -> Option<String> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let path = url.strip_prefix("sqlite:")?;
    let path = path.strip_prefix("//").unwrap_or(path);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path.to_string())
}

async fn ensure_database_initialized() {
    use crate::oauth2::OAuth2Store;
    use crate::session::SessionStore;
    use crate::userdb::UserStore;

    if let Err(e) = UserStore::init().await {
        eprintln!("UserStore init failed in test setup: {e}");
    }
    if let Err(e) = OAuth2Store::init().await {
        eprintln!("OAuth2Store init failed in test setup: {e}");
    }
    if let Err(e) = SessionStore::init().await {
        eprintln!("SessionStore init failed in test setup: {e}");
    }
}
