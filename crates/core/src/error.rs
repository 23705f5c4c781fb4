use thiserror::Error;

/// Errors raised by core domain types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}
