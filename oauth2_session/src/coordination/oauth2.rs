use http::HeaderMap;

use crate::oauth2::{
    AuthResponse, OAUTH2_STATE_COOKIE_NAME, OAuth2Account, OAuth2Store, PROVIDER_GITHUB,
    exchange_code_for_token, fetch_github_emails, fetch_github_user, prepare_oauth2_auth_request,
    select_primary_email, verify_callback_state,
};
use crate::session::{
    SessionStore, append_set_cookie, build_blank_session_cookie, build_session_cookie,
    get_cookie_from_headers, get_session_id_from_headers,
};
use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;

/// Start the GitHub login flow.
///
/// Returns the GitHub authorization URL to redirect the browser to, plus
/// the Set-Cookie header carrying the state cookie.
pub async fn prepare_github_login_core() -> Result<(String, HeaderMap), CoordinationError> {
    let (auth_url, headers) = prepare_oauth2_auth_request().await?;
    Ok((auth_url, headers))
}

/// Complete the GitHub callback: validate state, exchange the code, resolve
/// or create the local user, and issue a session.
///
/// Returns the post-login redirect target and the Set-Cookie header with the
/// new session cookie. The state check runs before any network call, so a
/// forged callback never reaches GitHub.
#[tracing::instrument(skip(headers, auth_response))]
pub async fn authorize_github_core(
    headers: &HeaderMap,
    auth_response: &AuthResponse,
) -> Result<(String, HeaderMap), CoordinationError> {
    let stored_state = get_cookie_from_headers(headers, OAUTH2_STATE_COOKIE_NAME);
    let code = verify_callback_state(
        auth_response.code.as_deref(),
        auth_response.state.as_deref(),
        stored_state.as_deref(),
    )?;

    let access_token = exchange_code_for_token(code).await?;
    let github_user = fetch_github_user(&access_token).await?;
    let provider_account_id = github_user.id.to_string();

    let user_id =
        match OAuth2Store::get_account_by_provider(PROVIDER_GITHUB, &provider_account_id).await? {
            Some(account) => {
                tracing::debug!(user_id = %account.user_id, "Existing GitHub account");
                account.user_id
            }
            None => {
                let user = register_github_user(&github_user, &access_token).await?;
                user.id
            }
        };

    let session = SessionStore::create_session(&user_id).await?;

    let mut response_headers = HeaderMap::new();
    append_set_cookie(&mut response_headers, build_session_cookie(&session.id))?;

    Ok(("/".to_string(), response_headers))
}

/// Tear down the current session and clear the session cookie.
///
/// Logout is only meaningful for a logged-in client; a request without a
/// session cookie is rejected as unauthorized.
#[tracing::instrument(skip(headers))]
pub async fn logout_core(headers: &HeaderMap) -> Result<HeaderMap, CoordinationError> {
    let Some(session_id) = get_session_id_from_headers(headers) else {
        return Err(CoordinationError::Unauthorized);
    };
    SessionStore::delete_session(&session_id).await?;

    let mut response_headers = HeaderMap::new();
    append_set_cookie(&mut response_headers, build_blank_session_cookie())?;
    Ok(response_headers)
}

/// First login for this GitHub identity: pick an email, then insert the user
/// and the provider link in one transaction.
async fn register_github_user(
    github_user: &crate::oauth2::types::GitHubUserInfo,
    access_token: &str,
) -> Result<User, CoordinationError> {
    // The public profile email is often hidden; fall back to the emails
    // endpoint, which also tells us whether the address is verified.
    let (email, email_verified) = match &github_user.email {
        Some(email) => (Some(email.clone()), false),
        None => {
            let emails = fetch_github_emails(access_token).await?;
            match select_primary_email(&emails) {
                Some(entry) => (Some(entry.email.clone()), entry.verified),
                None => (None, false),
            }
        }
    };

    let user = User::new(
        email,
        Some(github_user.display_name()),
        github_user.avatar_url.clone(),
        email_verified,
    )?;

    let account = OAuth2Account {
        provider: PROVIDER_GITHUB.to_string(),
        provider_account_id: github_user.id.to_string(),
        user_id: user.id.clone(),
        access_token: Some(access_token.to_string()),
    };

    let user = UserStore::create_user_with_oauth2_account(user, account).await?;
    tracing::info!(user_id = %user.id, "Registered new user from GitHub");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{COOKIE, SET_COOKIE};
    use serial_test::serial;

    use crate::oauth2::OAuth2Error;
    use crate::session::SESSION_COOKIE_NAME;
    use crate::test_utils::init_test_environment;

    fn callback_response(code: Option<&str>, state: Option<&str>) -> AuthResponse {
        AuthResponse {
            code: code.map(String::from),
            state: state.map(String::from),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_authorize_rejects_missing_state_cookie() {
        init_test_environment().await;

        let result =
            authorize_github_core(&HeaderMap::new(), &callback_response(Some("c"), Some("s")))
                .await;
        assert!(matches!(
            result,
            Err(CoordinationError::OAuth2Error(OAuth2Error::InvalidState(_)))
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_authorize_rejects_state_mismatch() {
        init_test_environment().await;

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            format!("{OAUTH2_STATE_COOKIE_NAME}=stored-state")
                .parse()
                .expect("cookie header should parse"),
        );
        let result = authorize_github_core(
            &headers,
            &callback_response(Some("c"), Some("different-state")),
        )
        .await;
        assert!(matches!(
            result,
            Err(CoordinationError::OAuth2Error(OAuth2Error::InvalidState(_)))
        ));
    }

    #[tokio::test]
    #[serial]
    async fn test_logout_without_session_is_unauthorized() {
        init_test_environment().await;

        let result = logout_core(&HeaderMap::new()).await;
        assert!(matches!(result, Err(CoordinationError::Unauthorized)));
    }

    #[tokio::test]
    #[serial]
    async fn test_logout_deletes_stored_session() {
        init_test_environment().await;

        let user = User::new(Some("bye@example.com".to_string()), None, None, false)
            .expect("user creation should not fail");
        sqlx::query(&format!(
            "INSERT INTO {} (id, email, email_verified) VALUES (?, ?, ?)",
            crate::storage::DB_TABLE_USERS.as_str()
        ))
        .bind(&user.id)
        .bind(&user.email)
        .bind(user.email_verified)
        .execute(crate::storage::DATA_STORE.pool())
        .await
        .expect("user insert should not fail");

        let session = SessionStore::create_session(&user.id)
            .await
            .expect("session creation should not fail");

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            format!("{}={}", SESSION_COOKIE_NAME.as_str(), session.id)
                .parse()
                .expect("cookie header should parse"),
        );
        logout_core(&headers).await.expect("logout should not fail");

        let gone = SessionStore::get_session_and_user(&session.id)
            .await
            .expect("lookup should not fail");
        assert!(gone.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_prepare_login_sets_state_cookie() {
        init_test_environment().await;

        let (auth_url, headers) = prepare_github_login_core()
            .await
            .expect("prepare should not fail");
        assert!(auth_url.contains("client_id="));
        assert!(auth_url.contains("state="));

        let cookie = headers
            .get(SET_COOKIE)
            .expect("state cookie should be set")
            .to_str()
            .expect("cookie should be ascii");
        assert!(cookie.starts_with(&format!("{OAUTH2_STATE_COOKIE_NAME}=")));
        assert!(cookie.contains("HttpOnly"));
    }
}
