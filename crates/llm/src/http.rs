use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::generator::TextGenerator;

/// HTTP generator speaking the Gemini `generateContent` protocol.
#[derive(Debug)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    config: GeneratorConfig,
}

impl HttpTextGenerator {
    /// Create a new HTTP generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        if config.api_key.trim().is_empty() {
            return Err(GeneratorError::Configuration("api_key is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GeneratorError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_output_tokens,
            }
        })
    }

    /// Pull `candidates[0].content.parts[0].text` out of the response.
    fn extract_text(response_json: &serde_json::Value) -> Result<String, GeneratorError> {
        let text = response_json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                GeneratorError::ParseError(format!("unexpected response format: {response_json}"))
            })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(GeneratorError::ParseError("empty completion".into()));
        }
        Ok(text.to_owned())
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let request_body = self.build_request_body(prompt);
        let url = self.config.generate_url();

        debug!(url = %url, model = %self.config.model, "sending generation request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(self.config.timeout_seconds)
                } else {
                    // Drop the URL: it carries the API key.
                    GeneratorError::HttpError(e.without_url().to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "generation API returned error");
            return Err(GeneratorError::ApiError(format!("HTTP {status}: {body}")));
        }

        let response_json: serde_json::Value = response.json().await.map_err(|e| {
            GeneratorError::ParseError(format!("failed to parse API response: {e}"))
        })?;

        Self::extract_text(&response_json)
    }
}
