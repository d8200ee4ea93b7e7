use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Serde error: {0}")]
    Serde(String),

    /// Missing or mismatched state in the callback request
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The provider rejected the authorization code itself
    #[error("Authorization code rejected: {0}")]
    AuthorizationCode(String),

    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Fetch user info error: {0}")]
    FetchUserInfo(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
