use http::StatusCode;
use oauth2_session::{CoordinationError, OAuth2Error};

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CoordinationError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match &e {
                CoordinationError::Unauthorized => StatusCode::UNAUTHORIZED,
                // A forged or replayed callback, or a code GitHub refused
                // to exchange, is the client's fault
                CoordinationError::OAuth2Error(OAuth2Error::InvalidState(_)) => {
                    StatusCode::BAD_REQUEST
                }
                CoordinationError::OAuth2Error(OAuth2Error::AuthorizationCode(_)) => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}
