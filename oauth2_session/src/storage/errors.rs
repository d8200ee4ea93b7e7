use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Connection error: {0}")]
    Connection(String),
}
