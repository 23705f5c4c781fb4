use std::sync::Arc;

use biotope_state::StateStore;
use biotope_state_memory::MemoryStateStore;
#[cfg(feature = "redis")]
use biotope_state_redis::{RedisConfig, RedisStateStore};

use crate::config::StateConfig;
use crate::error::ServerError;

/// Construct a [`StateStore`] from configuration.
pub fn create_state(config: &StateConfig) -> Result<Arc<dyn StateStore>, ServerError> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(MemoryStateStore::new())),
        #[cfg(feature = "redis")]
        "redis" => create_redis(config),
        other => Err(ServerError::Config(format!(
            "unsupported state backend: {other} (is the feature enabled?)"
        ))),
    }
}

#[cfg(feature = "redis")]
fn create_redis(config: &StateConfig) -> Result<Arc<dyn StateStore>, ServerError> {
    let mut redis_config = config
        .url
        .as_deref()
        .map_or_else(RedisConfig::default, RedisConfig::new);
    if let Some(prefix) = &config.prefix {
        redis_config = redis_config.with_prefix(prefix.clone());
    }
    let store = RedisStateStore::new(&redis_config)
        .map_err(|e| ServerError::Backend(format!("redis store: {e}")))?;
    Ok(Arc::new(store))
}
