use thiserror::Error;

/// Result type for card store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("card content not found: {0}")]
    NotFound(String),

    #[error("card content at '{0}' is not valid UTF-8")]
    NotUtf8(String),

    #[error("invalid card file name: {0}")]
    InvalidCardName(String),

    #[error("unknown storage backend: {0}")]
    UnknownBackend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}
