use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Pool, Sqlite};

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub(crate) struct Post {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

pub(crate) async fn create_table(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS post (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            body TEXT,
            user_id TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_post_title ON post(title)")
        .execute(pool)
        .await?;

    Ok(())
}

pub(crate) async fn create_post(
    pool: &Pool<Sqlite>,
    title: &str,
    body: Option<&str>,
    user_id: &str,
) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO post (title, body, user_id, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(user_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub(crate) async fn get_post(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT * FROM post WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn list_posts(pool: &Pool<Sqlite>) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT * FROM post ORDER BY created_at DESC, id DESC")
        .fetch_all(pool)
        .await
}

/// Delete a post only if it belongs to `user_id`; returns whether a row went away.
pub(crate) async fn delete_post_for_user(
    pool: &Pool<Sqlite>,
    id: i64,
    user_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM post WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
