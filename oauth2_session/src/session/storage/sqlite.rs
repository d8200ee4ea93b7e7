use sqlx::{Pool, Row, Sqlite};

use crate::session::errors::SessionError;
use crate::session::types::Session;
use crate::storage::{DB_TABLE_SESSIONS, DB_TABLE_USERS};
use crate::userdb::User;

// SQLite implementations
pub(crate) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), SessionError> {
    let sessions_table = DB_TABLE_SESSIONS.as_str();
    let users_table = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {sessions_table} (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL REFERENCES {users_table}(id),
            expires_at TIMESTAMP NOT NULL,
            login_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{sessions_table}_user_id
        ON {sessions_table}(user_id)
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn create_session_sqlite(
    pool: &Pool<Sqlite>,
    session: &Session,
) -> Result<(), SessionError> {
    // Ensure tables exist before any operations - this matters for
    // in-memory databases
    create_tables_sqlite(pool).await?;

    let sessions_table = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {sessions_table} (id, user_id, expires_at, login_at)
        VALUES (?, ?, ?, ?)
        "#
    ))
    .bind(&session.id)
    .bind(&session.user_id)
    .bind(session.expires_at)
    .bind(session.login_at)
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}

/// Fetch a session together with its owning user in a single join.
pub(super) async fn get_session_and_user_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
) -> Result<Option<(Session, User)>, SessionError> {
    create_tables_sqlite(pool).await?;
    crate::userdb::storage::create_tables_sqlite(pool)
        .await
        .map_err(|e| SessionError::Storage(e.to_string()))?;

    let sessions_table = DB_TABLE_SESSIONS.as_str();
    let users_table = DB_TABLE_USERS.as_str();

    let row = sqlx::query(&format!(
        r#"
        SELECT s.id AS session_id, s.user_id, s.expires_at, s.login_at,
               u.id AS user_row_id, u.email, u.hashed_password, u.name,
               u.email_verified, u.image
        FROM {sessions_table} s
        INNER JOIN {users_table} u ON u.id = s.user_id
        WHERE s.id = ?
        "#
    ))
    .bind(session_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    let Some(row) = row else {
        return Ok(None);
    };

    let session = Session {
        id: row
            .try_get("session_id")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        expires_at: row
            .try_get("expires_at")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        login_at: row
            .try_get("login_at")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
    };
    let user = User {
        id: row
            .try_get("user_row_id")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        hashed_password: row
            .try_get("hashed_password")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        email_verified: row
            .try_get("email_verified")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
        image: row
            .try_get("image")
            .map_err(|e| SessionError::Storage(e.to_string()))?,
    };

    Ok(Some((session, user)))
}

/// Delete a session row. Deleting an id that does not exist is not an error.
pub(super) async fn delete_session_sqlite(
    pool: &Pool<Sqlite>,
    session_id: &str,
) -> Result<(), SessionError> {
    create_tables_sqlite(pool).await?;

    let sessions_table = DB_TABLE_SESSIONS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {sessions_table} WHERE id = ?
        "#
    ))
    .bind(session_id)
    .execute(pool)
    .await
    .map_err(|e| SessionError::Storage(e.to_string()))?;

    Ok(())
}
