use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode, header::SET_COOKIE};

use oauth2_session::{Auth, SESSION_COOKIE_NAME, authenticate};

/// Resolve the session cookie once and make the result available to every
/// handler and extractor downstream via the request extensions.
///
/// When resolution rotated or tore down a session, the resulting Set-Cookie
/// is appended to the response on the way out, so the rotation decision
/// happens before any handler runs and its cookie always reaches the client.
/// A handler that issued its own session cookie (the OAuth callback, logout)
/// wins: the resolver's cookie reflects the pre-handler state and appending
/// it after the handler's would make the browser keep the stale one.
pub async fn load_auth(mut req: Request, next: Next) -> Response {
    let state = match authenticate(req.headers()).await {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "Session resolution failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let set_cookie = state.set_cookie.clone();
    req.extensions_mut().insert(Auth::from(state));

    let mut response = next.run(req).await;

    if let Some(cookie) = set_cookie {
        if response_sets_session_cookie(response.headers()) {
            tracing::debug!("Handler already set the session cookie, dropping resolver cookie");
            return response;
        }
        match cookie.parse() {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(_) => tracing::error!("Session cookie is not a valid header value"),
        }
    }

    response
}

/// Whether the response already carries a Set-Cookie for the session cookie
fn response_sets_session_cookie(headers: &HeaderMap) -> bool {
    let prefix = format!("{}=", SESSION_COOKIE_NAME.as_str());
    headers
        .get_all(SET_COOKIE)
        .iter()
        .any(|value| value.to_str().is_ok_and(|v| v.starts_with(&prefix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn session_cookie(value: &str) -> String {
        format!(
            "{}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age=2592000",
            SESSION_COOKIE_NAME.as_str()
        )
    }

    #[test]
    fn test_detects_session_cookie_set_by_handler() {
        // A login callback response carrying a freshly issued session
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            session_cookie("fresh-login-session").parse().unwrap(),
        );
        assert!(response_sets_session_cookie(&headers));
    }

    #[test]
    fn test_ignores_unrelated_cookies() {
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static(
                "github_oauth_state=abc; HttpOnly; SameSite=Lax; Path=/; Max-Age=600",
            ),
        );
        assert!(!response_sets_session_cookie(&headers));
        assert!(!response_sets_session_cookie(&HeaderMap::new()));
    }

    #[test]
    fn test_name_prefix_must_match_exactly() {
        // A cookie whose name merely ends with the session cookie name
        // must not suppress the resolver's cookie
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            format!("not_{}=x; Path=/", SESSION_COOKIE_NAME.as_str())
                .parse()
                .unwrap(),
        );
        assert!(!response_sets_session_cookie(&headers));
    }

    #[test]
    fn test_finds_session_cookie_among_several() {
        // State cookie first, session cookie second, as the callback
        // response can legitimately carry both
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("github_oauth_state=; Path=/; Max-Age=0"),
        );
        headers.append(
            SET_COOKIE,
            session_cookie("fresh-login-session").parse().unwrap(),
        );
        assert!(response_sets_session_cookie(&headers));
    }
}
