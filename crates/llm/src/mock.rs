use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::GeneratorError;
use crate::generator::TextGenerator;

/// A mock generator that always returns the same reply.
///
/// Tracks the number of calls and the last prompt seen so tests can verify
/// caching behaviour and prompt construction.
#[derive(Debug)]
pub struct MockTextGenerator {
    reply: String,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextGenerator {
    /// Create a mock generator returning `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of times [`generate`](TextGenerator::generate) was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// The prompt passed to the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .ok()
            .and_then(|prompt| prompt.clone())
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_owned());
        }
        Ok(self.reply.clone())
    }
}

/// A mock generator that always returns an error.
#[derive(Debug, Default)]
pub struct FailingTextGenerator {
    calls: AtomicUsize,
}

impl FailingTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(GeneratorError::ApiError("mock failure".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_reply_and_counts_calls() {
        let generator = MockTextGenerator::new("こんにちは");
        assert_eq!(generator.call_count(), 0);
        assert!(generator.last_prompt().is_none());

        assert_eq!(generator.generate("first").await.unwrap(), "こんにちは");
        assert_eq!(generator.generate("second").await.unwrap(), "こんにちは");
        assert_eq!(generator.call_count(), 2);
        assert_eq!(generator.last_prompt().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn failing_generator_returns_error() {
        let generator = FailingTextGenerator::new();
        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, GeneratorError::ApiError(_)));
        assert_eq!(generator.call_count(), 1);
    }
}
