use async_trait::async_trait;
use bytes::Bytes;

use crate::error::BlobError;
use crate::types::{ObjectMetadata, StoredObject};

/// Pluggable blob storage backend addressed by path-like object names.
///
/// The object proxy only reads; `put` exists for seeding and tooling.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Retrieve an object by name, returning both metadata and content.
    ///
    /// Returns `None` if the object does not exist. Errors mean the store could
    /// not determine whether it exists.
    async fn get(&self, name: &str) -> Result<Option<StoredObject>, BlobError>;

    /// Store an object, replacing any previous content under the same name.
    async fn put(
        &self,
        name: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> Result<ObjectMetadata, BlobError>;
}
