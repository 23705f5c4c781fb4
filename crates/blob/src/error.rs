use thiserror::Error;

/// Errors that can occur during blob storage operations.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The object name cannot be mapped onto the backend (e.g. path traversal).
    #[error("invalid object name: {0}")]
    InvalidName(String),

    /// A storage backend error occurred.
    #[error("blob storage error: {0}")]
    Storage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
