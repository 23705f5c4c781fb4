use thiserror::Error;

/// Errors that can occur while calling the generative text API.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("generation request timed out after {0}s")]
    Timeout(u64),

    /// Failed to parse the API response.
    #[error("failed to parse generation response: {0}")]
    ParseError(String),

    /// The API returned a non-success status.
    #[error("generation API error: {0}")]
    ApiError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}
