use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use biotope_daily::DailyError;
use biotope_objects::ObjectError;

/// Body `message` of a daily message failure. The cause is only logged.
pub const DAILY_FAILURE_MESSAGE: &str = "Failed to get daily message";

/// Errors that can occur when running the edge server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Building a backend failed at startup.
    #[error("backend error: {0}")]
    Backend(String),

    /// The daily message flow failed.
    #[error("daily message error: {0}")]
    Daily(#[from] DailyError),

    /// The object store could not be read.
    #[error("object proxy error: {0}")]
    Objects(#[from] ObjectError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        match self {
            Self::Objects(_) => (
                StatusCode::BAD_GATEWAY,
                [(CONTENT_TYPE, "text/plain; charset=utf-8")],
                "Object store unavailable",
            )
                .into_response(),
            Self::Daily(_) => internal_error(DAILY_FAILURE_MESSAGE),
            Self::Config(_) | Self::Io(_) | Self::Backend(_) => {
                internal_error("Unexpected server error")
            }
        }
    }
}

fn internal_error(message: &str) -> Response {
    let body = serde_json::json!({
        "error": "Internal Server Error",
        "message": message,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
