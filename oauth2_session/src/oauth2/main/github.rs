use std::sync::LazyLock;

use crate::oauth2::config::{
    OAUTH2_GITHUB_CLIENT_ID, OAUTH2_GITHUB_CLIENT_SECRET, OAUTH2_REDIRECT_URI, OAUTH2_TOKEN_URL,
    OAUTH2_USER_EMAILS_URL, OAUTH2_USERINFO_URL,
};
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::{GitHubEmail, GitHubTokenResponse, GitHubUserInfo};

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

fn get_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// Exchange the authorization code for an access token
///
/// Attempted exactly once; a rejected code surfaces as
/// `OAuth2Error::AuthorizationCode`, everything else as `TokenExchange`.
pub(crate) async fn exchange_code_for_token(code: &str) -> Result<String, OAuth2Error> {
    let mut form = vec![
        ("client_id", OAUTH2_GITHUB_CLIENT_ID.to_string()),
        ("client_secret", OAUTH2_GITHUB_CLIENT_SECRET.to_string()),
        ("code", code.to_string()),
    ];
    if let Some(redirect_uri) = OAUTH2_REDIRECT_URI.as_ref() {
        form.push(("redirect_uri", redirect_uri.clone()));
    }

    let client = get_client();
    let response = client
        .post(OAUTH2_TOKEN_URL.as_str())
        // Without this GitHub answers with a urlencoded body
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&form)
        .send()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    match response.status() {
        reqwest::StatusCode::OK => {
            tracing::debug!("Token exchange response: {:#?}", response);
        }
        status => {
            tracing::debug!("Token exchange response: {:#?}", response);
            return Err(OAuth2Error::TokenExchange(status.to_string()));
        }
    };

    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;
    let response_json: GitHubTokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| OAuth2Error::TokenExchange(e.to_string()))?;

    if let Some(error) = response_json.error {
        let description = response_json
            .error_description
            .unwrap_or_else(|| error.clone());
        tracing::error!("GitHub rejected the authorization code: {}", description);
        return Err(OAuth2Error::AuthorizationCode(description));
    }

    response_json.access_token.ok_or_else(|| {
        OAuth2Error::TokenExchange("Access token not present in response".to_string())
    })
}

pub(crate) async fn fetch_github_user(access_token: &str) -> Result<GitHubUserInfo, OAuth2Error> {
    let client = get_client();
    let response = client
        .get(OAUTH2_USERINFO_URL.as_str())
        .bearer_auth(access_token)
        .header(reqwest::header::USER_AGENT, "oauth2-session")
        .send()
        .await
        .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

    tracing::debug!("Profile response body: {:#?}", response_body);
    let user_data: GitHubUserInfo = serde_json::from_str(&response_body)
        .map_err(|e| OAuth2Error::Serde(format!("Failed to deserialize response body: {e}")))?;

    Ok(user_data)
}

/// Fetch the user's email list, needed when the profile hides the email
pub(crate) async fn fetch_github_emails(
    access_token: &str,
) -> Result<Vec<GitHubEmail>, OAuth2Error> {
    let client = get_client();
    let response = client
        .get(OAUTH2_USER_EMAILS_URL.as_str())
        .bearer_auth(access_token)
        .header(reqwest::header::USER_AGENT, "oauth2-session")
        .send()
        .await
        .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

    let response_body = response
        .text()
        .await
        .map_err(|e| OAuth2Error::FetchUserInfo(e.to_string()))?;

    let emails: Vec<GitHubEmail> = serde_json::from_str(&response_body)
        .map_err(|e| OAuth2Error::Serde(format!("Failed to deserialize email list: {e}")))?;

    Ok(emails)
}

/// Pick the email to store: primary, else verified, else first
pub(crate) fn select_primary_email(emails: &[GitHubEmail]) -> Option<&GitHubEmail> {
    emails
        .iter()
        .find(|e| e.primary)
        .or_else(|| emails.iter().find(|e| e.verified))
        .or_else(|| emails.first())
}
