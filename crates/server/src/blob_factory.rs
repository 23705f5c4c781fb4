use std::path::Path;
use std::sync::Arc;

use biotope_blob::{BlobStore, FsBlobStore, MemoryBlobStore};
use tracing::warn;

use crate::config::BlobConfig;
use crate::error::ServerError;

/// Construct a [`BlobStore`] from configuration.
pub fn create_blob_store(config: &BlobConfig) -> Result<Arc<dyn BlobStore>, ServerError> {
    match config.backend.as_str() {
        "memory" => {
            warn!("using the in-memory blob store; every object will be reported missing");
            Ok(Arc::new(MemoryBlobStore::new()))
        }
        "fs" => {
            let root = config.root.as_deref().ok_or_else(|| {
                ServerError::Config("fs blob backend requires 'root' in [blob]".into())
            })?;
            if !Path::new(root).is_dir() {
                return Err(ServerError::Config(format!(
                    "blob root is not a directory: {root}"
                )));
            }
            Ok(Arc::new(FsBlobStore::new(root)))
        }
        other => Err(ServerError::Config(format!(
            "unsupported blob backend: {other}"
        ))),
    }
}
