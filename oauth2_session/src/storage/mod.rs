mod config;
mod errors;
mod types;

pub(crate) use config::{DB_TABLE_OAUTH2_ACCOUNTS, DB_TABLE_SESSIONS, DB_TABLE_USERS};
pub(crate) use types::DATA_STORE;

pub use errors::StorageError;

/// Clone of the shared SQLite pool, for callers that manage their own tables
pub fn data_store_pool() -> sqlx::SqlitePool {
    DATA_STORE.pool().clone()
}

pub(crate) async fn init() -> Result<(), StorageError> {
    let pool = DATA_STORE.pool();
    // Fail fast on an unreachable database rather than at first query
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
    Ok(())
}
