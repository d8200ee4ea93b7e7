use chrono::{Duration, Utc};

use crate::session::config::SESSION_COOKIE_MAX_AGE;
use crate::session::errors::SessionError;
use crate::session::types::Session;
use crate::storage::DATA_STORE;
use crate::userdb::User;
use crate::utils::gen_random_string;

use super::sqlite::*;

pub(crate) struct SessionStore;

impl SessionStore {
    /// Initialize the session database tables
    pub(crate) async fn init() -> Result<(), SessionError> {
        create_tables_sqlite(DATA_STORE.pool()).await
    }

    /// Create a fresh session for a user and persist it
    #[tracing::instrument(fields(user_id = %user_id))]
    pub(crate) async fn create_session(user_id: &str) -> Result<Session, SessionError> {
        let now = Utc::now();
        let session = Session {
            id: gen_random_string(32)?,
            user_id: user_id.to_string(),
            expires_at: now + Duration::seconds(*SESSION_COOKIE_MAX_AGE as i64),
            login_at: now,
        };

        create_session_sqlite(DATA_STORE.pool(), &session).await?;
        tracing::debug!(session_id = %session.id, "Created session");

        Ok(session)
    }

    /// Look up a session and its owning user in one query
    #[tracing::instrument(fields(session_id = %session_id))]
    pub(crate) async fn get_session_and_user(
        session_id: &str,
    ) -> Result<Option<(Session, User)>, SessionError> {
        get_session_and_user_sqlite(DATA_STORE.pool(), session_id).await
    }

    /// Delete a session; unknown ids are silently ignored
    #[tracing::instrument(fields(session_id = %session_id))]
    pub(crate) async fn delete_session(session_id: &str) -> Result<(), SessionError> {
        delete_session_sqlite(DATA_STORE.pool(), session_id).await
    }
}
