use serde::Deserialize;

/// Configuration for the blob store behind the object cache proxy.
#[derive(Debug, Deserialize)]
pub struct BlobConfig {
    /// Which backend to use: `"memory"` or `"fs"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Root directory for the `fs` backend.
    pub root: Option<String>,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            root: None,
        }
    }
}

fn default_backend() -> String {
    "memory".to_owned()
}
