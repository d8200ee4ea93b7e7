use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::userdb::User;

/// A server-side session row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub login_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Outcome of resolving the session cookie for one request.
///
/// `user` and `session` are both `Some` or both `None`. `set_cookie`
/// carries a Set-Cookie value the caller must forward to the client
/// when the session was rotated or torn down.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub set_cookie: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
