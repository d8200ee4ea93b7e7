use std::fmt;

use thiserror::Error;

use crate::session::SessionError;
use crate::userdb::UserError;

/// Machine-readable code attached to a normalized procedure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    NotFound,
    InternalServerError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform failure shape every procedure call resolves to.
///
/// `Rpc` is a real error with a code and message. `PageNotFound` and
/// `Redirect` are navigation signals, not errors from the application's
/// perspective; they pass through dispatch untouched so the routing layer
/// can render a 404 page or issue the redirect.
#[derive(Debug, Error, Clone)]
pub enum ProcedureError {
    #[error("{code}: {message}")]
    Rpc { code: ErrorCode, message: String },

    #[error("page not found")]
    PageNotFound,

    #[error("redirect to {0}")]
    Redirect(String),
}

impl ProcedureError {
    pub fn unauthorized() -> Self {
        Self::Rpc {
            code: ErrorCode::Unauthorized,
            message: "Not authenticated".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Rpc {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Rpc {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Rpc {
            code: ErrorCode::InternalServerError,
            message: message.into(),
        }
    }

    /// The error code, or `None` for navigation signals.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            Self::PageNotFound | Self::Redirect(_) => None,
        }
    }
}

// Unexpected failures from the storage and auth layers normalize to
// INTERNAL_SERVER_ERROR at this boundary.

impl From<sqlx::Error> for ProcedureError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Procedure storage failure");
        Self::internal(err.to_string())
    }
}

impl From<SessionError> for ProcedureError {
    fn from(err: SessionError) -> Self {
        tracing::error!(error = %err, "Procedure session failure");
        Self::internal(err.to_string())
    }
}

impl From<UserError> for ProcedureError {
    fn from(err: UserError) -> Self {
        tracing::error!(error = %err, "Procedure user failure");
        Self::internal(err.to_string())
    }
}
