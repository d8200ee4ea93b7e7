//! End-to-end GitHub login flow against a local mock provider: state check,
//! code exchange, user provisioning and session issuance.

mod common;

use std::sync::LazyLock;

use http::HeaderMap;
use http::header::{COOKIE, SET_COOKIE};
use serial_test::serial;

use oauth2_session::{
    AuthResponse, CoordinationError, OAUTH2_STATE_COOKIE_NAME, OAuth2Error, SESSION_COOKIE_NAME,
    authorize_github_core, data_store_pool,
};

async fn setup() {
    LazyLock::force(&common::MOCK_GITHUB);
    oauth2_session::init()
        .await
        .expect("initialization should succeed");
}

fn state_cookie(state: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        format!("{OAUTH2_STATE_COOKIE_NAME}={state}")
            .parse()
            .expect("cookie header should parse"),
    );
    headers
}

fn callback(code: &str, state: &str) -> AuthResponse {
    AuthResponse {
        code: Some(code.to_string()),
        state: Some(state.to_string()),
    }
}

fn session_id_from_cookie(headers: &HeaderMap) -> String {
    let cookie = headers
        .get(SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .expect("cookie should be ascii");
    assert!(
        cookie.starts_with(&format!("{}=", SESSION_COOKIE_NAME.as_str())),
        "unexpected cookie: {cookie}"
    );
    assert!(cookie.contains("HttpOnly"));
    cookie
        .split_once('=')
        .and_then(|(_, rest)| rest.split(';').next())
        .expect("cookie should carry a value")
        .to_string()
}

#[tokio::test]
#[serial]
async fn test_callback_provisions_user_and_reuses_identity_on_return() {
    setup().await;
    let pool = data_store_pool();

    println!("First login: unknown GitHub identity");
    let headers = state_cookie("state-abc");
    let (redirect_to, response_headers) =
        authorize_github_core(&headers, &callback(common::VALID_CODE, "state-abc"))
            .await
            .expect("callback should succeed");
    assert_eq!(redirect_to, "/");
    let session_id = session_id_from_cookie(&response_headers);

    println!("User row carries the email from the emails endpoint");
    let (user_id, email, email_verified): (String, Option<String>, bool) =
        sqlx::query_as("SELECT id, email, email_verified FROM user")
            .fetch_one(&pool)
            .await
            .expect("exactly one user row");
    assert_eq!(email.as_deref(), Some(common::PRIMARY_EMAIL));
    assert!(email_verified);

    println!("Provider link and session point at that user");
    let account_user: String = sqlx::query_scalar(
        "SELECT user_id FROM oauth2_account WHERE provider = 'github' AND provider_account_id = ?",
    )
    .bind(common::GITHUB_USER_ID.to_string())
    .fetch_one(&pool)
    .await
    .expect("account row should exist");
    assert_eq!(account_user, user_id);

    let session_user: String = sqlx::query_scalar("SELECT user_id FROM session WHERE id = ?")
        .bind(&session_id)
        .fetch_one(&pool)
        .await
        .expect("session row should exist");
    assert_eq!(session_user, user_id);

    println!("Second login: same identity, no duplicate user");
    let headers = state_cookie("state-def");
    let (_, response_headers) =
        authorize_github_core(&headers, &callback(common::VALID_CODE, "state-def"))
            .await
            .expect("repeat login should succeed");
    let second_session_id = session_id_from_cookie(&response_headers);
    assert_ne!(second_session_id, session_id);

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
        .fetch_one(&pool)
        .await
        .expect("count should not fail");
    assert_eq!(user_count, 1);

    let session_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM session")
        .fetch_one(&pool)
        .await
        .expect("count should not fail");
    assert_eq!(session_count, 2);
}

#[tokio::test]
#[serial]
async fn test_callback_with_rejected_code_is_client_error() {
    setup().await;

    let headers = state_cookie("state-xyz");
    let result = authorize_github_core(&headers, &callback("expired-code", "state-xyz")).await;
    assert!(matches!(
        result,
        Err(CoordinationError::OAuth2Error(
            OAuth2Error::AuthorizationCode(_)
        ))
    ));
}
