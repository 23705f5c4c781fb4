use async_trait::async_trait;

use crate::error::GeneratorError;

/// Trait for producing free text from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    /// Generate a single completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
