mod blob;
mod daily_message;
mod generator;
mod object_cache;
mod server;
mod state;
mod telemetry;

#[cfg(test)]
mod tests;

pub use blob::*;
pub use daily_message::*;
pub use generator::*;
pub use object_cache::*;
pub use server::*;
pub use state::*;
pub use telemetry::*;

use std::path::Path;

use serde::Deserialize;

use crate::error::ServerError;

/// Top-level configuration for the edge server, loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct EdgeConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Key-value store for daily messages.
    #[serde(default)]
    pub state: StateConfig,
    /// Generative text API.
    #[serde(default)]
    pub generator: GeneratorServerConfig,
    /// Daily message service settings.
    #[serde(default)]
    pub daily_message: DailyMessageConfig,
    /// Blob store for the object cache proxy.
    #[serde(default)]
    pub blob: BlobConfig,
    /// Response cache for the object cache proxy.
    #[serde(default)]
    pub object_cache: ObjectCacheConfig,
    /// OpenTelemetry distributed tracing configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl EdgeConfig {
    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ServerError> {
        toml::from_str(contents).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    ///
    /// The boolean is `true` when the file was found.
    pub fn load(path: &Path) -> Result<(Self, bool), ServerError> {
        if !path.exists() {
            return Ok((Self::default(), false));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok((Self::from_toml(&contents)?, true))
    }
}
