use std::sync::Arc;

use biotope_llm::{GeneratorConfig, HttpTextGenerator, TextGenerator};
use tracing::info;

use crate::config::GeneratorServerConfig;
use crate::error::ServerError;

/// Build the HTTP generator, or `None` when no credential is available.
///
/// A missing credential is a supported mode, not an error: the daily message
/// service then serves fallback messages only.
pub fn create_generator(
    config: &GeneratorServerConfig,
    api_key: Option<String>,
) -> Result<Option<Arc<dyn TextGenerator>>, ServerError> {
    let Some(api_key) = api_key else {
        info!("no generator API key configured, daily messages will use the fallback");
        return Ok(None);
    };

    let generator_config = GeneratorConfig::new(&config.endpoint, &config.model, api_key)
        .with_timeout(config.timeout_seconds)
        .with_temperature(config.temperature)
        .with_max_output_tokens(config.max_output_tokens);
    let generator = HttpTextGenerator::new(generator_config)
        .map_err(|e| ServerError::Backend(format!("generator: {e}")))?;

    info!(model = %config.model, "generative text API enabled");
    Ok(Some(Arc::new(generator)))
}
