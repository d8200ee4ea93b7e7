use http::HeaderMap;
use subtle::ConstantTimeEq;
use url::Url;

use crate::oauth2::config::{
    OAUTH2_AUTH_URL, OAUTH2_GITHUB_CLIENT_ID, OAUTH2_REDIRECT_URI, OAUTH2_SCOPE,
    OAUTH2_STATE_COOKIE_MAX_AGE, OAUTH2_STATE_COOKIE_NAME,
};
use crate::oauth2::errors::OAuth2Error;
use crate::session::append_set_cookie;
use crate::session::build_state_cookie;
use crate::utils::gen_random_string;

/// Build the GitHub authorization URL and the state cookie that binds the
/// callback to this login attempt
pub(crate) async fn prepare_oauth2_auth_request() -> Result<(String, HeaderMap), OAuth2Error> {
    let state = gen_random_string(32)?;

    let mut auth_url = Url::parse(OAUTH2_AUTH_URL.as_str())
        .map_err(|e| OAuth2Error::TokenExchange(format!("Invalid authorization URL: {e}")))?;
    auth_url
        .query_pairs_mut()
        .append_pair("client_id", OAUTH2_GITHUB_CLIENT_ID.as_str())
        .append_pair("scope", OAUTH2_SCOPE)
        .append_pair("state", &state);
    if let Some(redirect_uri) = OAUTH2_REDIRECT_URI.as_ref() {
        auth_url
            .query_pairs_mut()
            .append_pair("redirect_uri", redirect_uri);
    }

    let mut headers = HeaderMap::new();
    append_set_cookie(
        &mut headers,
        build_state_cookie(OAUTH2_STATE_COOKIE_NAME, &state, OAUTH2_STATE_COOKIE_MAX_AGE),
    )
    .map_err(|e| OAuth2Error::Cookie(e.to_string()))?;

    tracing::debug!("Auth URL: {:#?}", auth_url);

    Ok((auth_url.into(), headers))
}

/// The CSRF validation gate, checked before any network call
///
/// Every input must be present and `state` must equal the stored state from
/// the cookie; comparison is constant-time.
pub(crate) fn verify_callback_state<'a>(
    code: Option<&'a str>,
    state: Option<&str>,
    stored_state: Option<&str>,
) -> Result<&'a str, OAuth2Error> {
    let code = code.ok_or_else(|| OAuth2Error::InvalidState("Missing code".to_string()))?;
    let state = state.ok_or_else(|| OAuth2Error::InvalidState("Missing state".to_string()))?;
    let stored_state = stored_state
        .ok_or_else(|| OAuth2Error::InvalidState("Missing state cookie".to_string()))?;

    if state.as_bytes().ct_eq(stored_state.as_bytes()).into() {
        Ok(code)
    } else {
        Err(OAuth2Error::InvalidState("State mismatch".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_callback_state_accepts_matching_state() {
        let code = verify_callback_state(Some("xyz"), Some("abc"), Some("abc"))
            .expect("matching state should pass");
        assert_eq!(code, "xyz");
    }

    #[test]
    fn test_verify_callback_state_rejects_mismatch() {
        let result = verify_callback_state(Some("xyz"), Some("wrong"), Some("abc"));
        assert!(matches!(result, Err(OAuth2Error::InvalidState(_))));
    }

    #[test]
    fn test_verify_callback_state_rejects_missing_inputs() {
        assert!(verify_callback_state(None, Some("abc"), Some("abc")).is_err());
        assert!(verify_callback_state(Some("xyz"), None, Some("abc")).is_err());
        assert!(verify_callback_state(Some("xyz"), Some("abc"), None).is_err());
    }

    #[test]
    fn test_verify_callback_state_rejects_different_lengths() {
        let result = verify_callback_state(Some("xyz"), Some("abcdef"), Some("abc"));
        assert!(matches!(result, Err(OAuth2Error::InvalidState(_))));
    }
}
