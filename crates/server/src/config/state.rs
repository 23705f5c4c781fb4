use serde::Deserialize;

/// Configuration for the key-value store holding daily messages.
#[derive(Debug, Deserialize)]
pub struct StateConfig {
    /// Which backend to use: `"memory"` or `"redis"`.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Connection URL for the backend (e.g. `redis://localhost:6379`).
    pub url: Option<String>,

    /// Key prefix for backends that support it. Defaults to `"biotope"`.
    pub prefix: Option<String>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: None,
            prefix: None,
        }
    }
}

fn default_backend() -> String {
    "memory".to_owned()
}
