use biotope_core::CoreError;
use biotope_state::StateError;
use thiserror::Error;

/// Errors from the daily message flow that reach the client as a 500.
///
/// Generator failures never appear here: they are absorbed by the fallback.
#[derive(Debug, Error)]
pub enum DailyError {
    #[error("state store error: {0}")]
    State(#[from] StateError),

    #[error("record error: {0}")]
    Record(#[from] CoreError),
}
