use serde::Deserialize;

/// Environment variable that supplies (or overrides) the generator API key.
pub const API_KEY_ENV: &str = "BIOTOPE_GENERATOR_API_KEY";

/// Configuration for the generative text API used by the daily message service.
///
/// An empty `api_key` is valid: the service then serves fallback messages only.
///
/// ```toml
/// [generator]
/// model = "gemini-2.0-flash"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Deserialize)]
pub struct GeneratorServerConfig {
    /// Base URL of the models collection.
    #[serde(default = "default_generator_endpoint")]
    pub endpoint: String,
    /// Model to use.
    #[serde(default = "default_generator_model")]
    pub model: String,
    /// API key. Prefer setting `BIOTOPE_GENERATOR_API_KEY` instead.
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_generator_timeout")]
    pub timeout_seconds: u64,
    /// Sampling temperature.
    #[serde(default = "default_generator_temperature")]
    pub temperature: f64,
    /// Maximum tokens in the response.
    #[serde(default = "default_generator_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl GeneratorServerConfig {
    /// The credential to use, if any.
    ///
    /// A non-empty `env_value` wins over the file value; blank values count as
    /// absent.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| Some(self.api_key.clone()).filter(|key| !key.trim().is_empty()))
    }
}

impl Default for GeneratorServerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generator_endpoint(),
            model: default_generator_model(),
            api_key: String::new(),
            timeout_seconds: default_generator_timeout(),
            temperature: default_generator_temperature(),
            max_output_tokens: default_generator_max_output_tokens(),
        }
    }
}

fn default_generator_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_owned()
}

fn default_generator_model() -> String {
    "gemini-2.0-flash".to_owned()
}

fn default_generator_timeout() -> u64 {
    30
}

fn default_generator_temperature() -> f64 {
    0.9
}

fn default_generator_max_output_tokens() -> u32 {
    512
}
