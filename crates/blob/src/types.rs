use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP-facing metadata recorded alongside a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// MIME content type (e.g. `"model/gltf-binary"`), if known.
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size_bytes: u64,
    /// When the object was written, if the backend tracks it.
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// A fully resolved object: name, metadata and the binary content.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Path-like name the object was requested by.
    pub name: String,
    /// Object metadata.
    pub metadata: ObjectMetadata,
    /// The raw binary content.
    pub body: Bytes,
}
