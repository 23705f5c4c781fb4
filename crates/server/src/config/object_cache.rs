use serde::Deserialize;

/// Response cache settings for the object cache proxy.
#[derive(Debug, Deserialize)]
pub struct ObjectCacheConfig {
    /// Host component of cache keys.
    #[serde(default = "default_namespace_host")]
    pub namespace_host: String,
    /// Upper bound on cached bytes (keys plus bodies).
    #[serde(default = "default_max_capacity_bytes")]
    pub max_capacity_bytes: u64,
}

impl Default for ObjectCacheConfig {
    fn default() -> Self {
        Self {
            namespace_host: default_namespace_host(),
            max_capacity_bytes: default_max_capacity_bytes(),
        }
    }
}

fn default_namespace_host() -> String {
    biotope_objects::DEFAULT_NAMESPACE_HOST.to_owned()
}

fn default_max_capacity_bytes() -> u64 {
    256 * 1024 * 1024
}
