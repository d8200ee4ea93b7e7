use http::HeaderMap;

use crate::session::errors::SessionError;
use crate::session::storage::SessionStore;
use crate::session::types::AuthState;

use super::cookie::{build_blank_session_cookie, build_session_cookie, get_session_id_from_headers};

/// Resolve the session cookie in `headers` to the authenticated user.
///
/// An expired session is replaced in place: the old row is deleted, a fresh
/// one is created for the same user, and `set_cookie` carries the replacement
/// id so the client keeps a live session across the idle gap. A cookie that
/// does not match any stored session yields an anonymous result plus a
/// clearing cookie.
#[tracing::instrument(skip(headers))]
pub async fn authenticate(headers: &HeaderMap) -> Result<AuthState, SessionError> {
    let Some(session_id) = get_session_id_from_headers(headers) else {
        return Ok(AuthState::default());
    };

    let Some((session, user)) = SessionStore::get_session_and_user(&session_id).await? else {
        tracing::debug!("Session cookie does not match any stored session");
        return Ok(AuthState {
            user: None,
            session: None,
            set_cookie: Some(build_blank_session_cookie()),
        });
    };

    if session.is_expired() {
        tracing::debug!(user_id = %user.id, "Rotating expired session");
        let replacement = SessionStore::create_session(&user.id).await?;
        SessionStore::delete_session(&session.id).await?;
        let cookie = build_session_cookie(&replacement.id);
        return Ok(AuthState {
            user: Some(user),
            session: Some(replacement),
            set_cookie: Some(cookie),
        });
    }

    Ok(AuthState {
        user: Some(user),
        session: Some(session),
        set_cookie: None,
    })
}
