use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum UserError {
    #[error("Storage error: {0}")]
    Storage(String),

    /// The user+account transaction committed without yielding a user row
    #[error("User creation yielded no row")]
    NoRowReturned,

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
