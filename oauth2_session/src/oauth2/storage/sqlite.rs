use sqlx::{Pool, Sqlite};

use crate::oauth2::{errors::OAuth2Error, types::OAuth2Account};
use crate::storage::{DB_TABLE_OAUTH2_ACCOUNTS, DB_TABLE_USERS};

// SQLite implementations
pub(crate) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), OAuth2Error> {
    let accounts_table = DB_TABLE_OAUTH2_ACCOUNTS.as_str();
    let users_table = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {accounts_table} (
            provider TEXT NOT NULL,
            provider_account_id TEXT NOT NULL,
            user_id TEXT NOT NULL REFERENCES {users_table}(id),
            access_token TEXT,
            PRIMARY KEY (provider, provider_account_id)
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| OAuth2Error::Storage(e.to_string()))?;

    // Index on user_id for faster reverse lookups
    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{}_user_id ON {}(user_id)
        "#,
        accounts_table.replace(".", "_"),
        accounts_table
    ))
    .execute(pool)
    .await
    .map_err(|e| OAuth2Error::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_account_by_provider_sqlite(
    pool: &Pool<Sqlite>,
    provider: &str,
    provider_account_id: &str,
) -> Result<Option<OAuth2Account>, OAuth2Error> {
    // Ensure tables exist before any operations
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OAUTH2_ACCOUNTS.as_str();

    sqlx::query_as::<_, OAuth2Account>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE provider = ? AND provider_account_id = ?
        "#
    ))
    .bind(provider)
    .bind(provider_account_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| OAuth2Error::Storage(e.to_string()))
}
