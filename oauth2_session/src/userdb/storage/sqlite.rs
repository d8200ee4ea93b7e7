use sqlx::{Pool, Sqlite};

use crate::oauth2::types::OAuth2Account;
use crate::storage::{DB_TABLE_OAUTH2_ACCOUNTS, DB_TABLE_USERS};
use crate::userdb::{errors::UserError, types::User};

// SQLite implementations
pub(crate) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT UNIQUE,
            hashed_password TEXT,
            name TEXT,
            email_verified BOOLEAN NOT NULL DEFAULT false,
            image TEXT
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_user_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
) -> Result<Option<User>, UserError> {
    // Ensure tables exist before any operations - this matters for
    // in-memory databases
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

/// Insert a new user and its linked OAuth2 account in one transaction
///
/// Either both rows exist afterwards or neither does; a request aborting
/// mid-flight can never leave an orphaned user without a linked account.
pub(super) async fn create_user_with_account_sqlite(
    pool: &Pool<Sqlite>,
    user: User,
    account: OAuth2Account,
) -> Result<User, UserError> {
    create_tables_sqlite(pool).await?;
    crate::oauth2::storage::create_tables_sqlite(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    let users_table = DB_TABLE_USERS.as_str();
    let accounts_table = DB_TABLE_OAUTH2_ACCOUNTS.as_str();

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    let inserted_id: Option<String> = sqlx::query_scalar(&format!(
        r#"
        INSERT INTO {users_table} (id, email, hashed_password, name, email_verified, image)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.hashed_password)
    .bind(&user.name)
    .bind(user.email_verified)
    .bind(&user.image)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    // Dropping the transaction without committing rolls the insert back
    if inserted_id.is_none() {
        return Err(UserError::NoRowReturned);
    }

    sqlx::query(&format!(
        r#"
        INSERT INTO {accounts_table} (provider, provider_account_id, user_id, access_token)
        VALUES (?, ?, ?, ?)
        "#
    ))
    .bind(&account.provider)
    .bind(&account.provider_account_id)
    .bind(&user.id)
    .bind(&account.access_token)
    .execute(&mut *tx)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(user)
}
