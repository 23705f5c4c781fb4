//! Daily message service.
//!
//! One short Japanese message per calendar day, cached in a key-value store.
//! A configured [`TextGenerator`](biotope_llm::TextGenerator) produces the
//! text; without one, or when it fails, a seasonal template is used instead
//! and cached for a shorter period so generation is retried soon.

pub mod error;
pub mod fallback;
pub mod prompt;
pub mod service;

pub use error::DailyError;
pub use fallback::fallback_message;
pub use prompt::build_prompt;
pub use service::{CacheStatus, DailyMessage, DailyMessageService, STATE_NAMESPACE};
