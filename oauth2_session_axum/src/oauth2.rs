use axum::{
    Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};

use oauth2_session::{
    AuthResponse, authorize_github_core, logout_core, prepare_github_login_core,
};

use super::error::IntoResponseError;

/// Router with the GitHub login, callback, and logout endpoints.
///
/// Nest it under `AUTH_ROUTE_PREFIX` so the callback lands at
/// `/api/auth/callback/github`, matching the redirect URI registered with
/// GitHub.
pub fn auth_router() -> Router {
    Router::new()
        .route("/github", get(github_auth))
        .route("/callback/github", get(github_callback))
        .route("/logout", post(logout))
}

async fn github_auth() -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let (auth_url, headers) = prepare_github_login_core().await.into_response_error()?;
    Ok((headers, Redirect::to(&auth_url)))
}

async fn github_callback(
    headers: HeaderMap,
    Query(auth_response): Query<AuthResponse>,
) -> Result<Response, (StatusCode, String)> {
    let (redirect_to, response_headers) = authorize_github_core(&headers, &auth_response)
        .await
        .into_response_error()?;

    // Callback success is a plain 302; Redirect::to would emit 303
    let mut response = (response_headers, Redirect::to(&redirect_to)).into_response();
    *response.status_mut() = StatusCode::FOUND;
    Ok(response)
}

async fn logout(headers: HeaderMap) -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let response_headers = logout_core(&headers).await.into_response_error()?;
    Ok((response_headers, Redirect::to("/")))
}
