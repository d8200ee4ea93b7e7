use std::str::FromStr;
use std::sync::LazyLock;

use sqlx::{Pool, Sqlite};

use super::config::database_url;

#[derive(Clone, Debug)]
pub(crate) struct SqliteDataStore {
    pool: sqlx::SqlitePool,
}

impl SqliteDataStore {
    pub(crate) fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

pub(crate) static DATA_STORE: LazyLock<SqliteDataStore> = LazyLock::new(|| {
    let store_url = database_url();

    tracing::info!("Initializing SQLite data store: {}", store_url);

    let opts = sqlx::sqlite::SqliteConnectOptions::from_str(store_url)
        .expect("Failed to parse SQLite connection string")
        .create_if_missing(true);

    SqliteDataStore {
        pool: sqlx::sqlite::SqlitePool::connect_lazy_with(opts),
    }
});
