/// Configuration for the HTTP generative text client.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// Base URL of the models collection
    /// (e.g. `https://generativelanguage.googleapis.com/v1beta/models`).
    pub endpoint: String,
    /// Model to use (e.g. `gemini-2.0-flash`).
    pub model: String,
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens in the response.
    pub max_output_tokens: u32,
}

impl GeneratorConfig {
    /// Create a new config with the given endpoint, model, and API key.
    ///
    /// Uses sensible defaults: 30s timeout, temperature 0.9, max 512 tokens.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            timeout_seconds: 30,
            temperature: 0.9,
            max_output_tokens: 512,
        }
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum tokens in the response.
    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Full `generateContent` URL, without the key.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

// The API key must never reach the logs.
impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}
