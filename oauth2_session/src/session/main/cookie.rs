use http::HeaderMap;
use http::header::{COOKIE, SET_COOKIE};

use crate::config::IS_PRODUCTION;
use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;

/// Serialize one cookie with the attribute set every cookie of ours uses:
/// HttpOnly, SameSite=Lax, Path=/, and Secure outside development.
fn format_cookie(name: &str, value: &str, max_age: i64) -> String {
    let mut cookie = format!("{name}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}");
    if *IS_PRODUCTION {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Session cookie carrying a live session id
pub(crate) fn build_session_cookie(session_id: &str) -> String {
    format_cookie(
        SESSION_COOKIE_NAME.as_str(),
        session_id,
        *SESSION_COOKIE_MAX_AGE as i64,
    )
}

/// Expired session cookie, used to clear the client on logout or teardown
pub(crate) fn build_blank_session_cookie() -> String {
    format_cookie(SESSION_COOKIE_NAME.as_str(), "", 0)
}

/// Short-lived cookie for the OAuth2 state parameter
pub(crate) fn build_state_cookie(name: &str, value: &str, max_age: u64) -> String {
    format_cookie(name, value, max_age as i64)
}

/// Append a Set-Cookie header without clobbering ones already present
pub(crate) fn append_set_cookie(
    headers: &mut HeaderMap,
    cookie: String,
) -> Result<(), SessionError> {
    let value = cookie
        .parse()
        .map_err(|_| SessionError::Cookie(format!("Invalid cookie: {cookie}")))?;
    headers.append(SET_COOKIE, value);
    Ok(())
}

/// Extract a named cookie value from the request Cookie header
pub(crate) fn get_cookie_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str
                .split(';')
                .map(str::trim)
                .find_map(|pair| pair.strip_prefix(&format!("{name}=")))
                .map(String::from)
        })
}

/// Extract the session id from the request Cookie header, if any
pub fn get_session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    get_cookie_from_headers(headers, SESSION_COOKIE_NAME.as_str())
}
