use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use dashmap::DashMap;

use crate::error::BlobError;
use crate::store::BlobStore;
use crate::types::{ObjectMetadata, StoredObject};

/// In-memory [`BlobStore`] backed by a [`DashMap`].
///
/// Cloning the body is cheap (`Bytes` is reference counted).
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: DashMap<String, (ObjectMetadata, Bytes)>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, name: &str) -> Result<Option<StoredObject>, BlobError> {
        Ok(self.objects.get(name).map(|entry| {
            let (metadata, body) = entry.value();
            StoredObject {
                name: name.to_owned(),
                metadata: metadata.clone(),
                body: body.clone(),
            }
        }))
    }

    async fn put(
        &self,
        name: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> Result<ObjectMetadata, BlobError> {
        if name.is_empty() {
            return Err(BlobError::InvalidName(String::new()));
        }
        let metadata = ObjectMetadata {
            content_type: content_type.map(str::to_owned),
            size_bytes: data.len() as u64,
            uploaded_at: Some(Utc::now()),
        };
        self.objects
            .insert(name.to_owned(), (metadata.clone(), data));
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get() {
        let store = MemoryBlobStore::new();
        let meta = store
            .put("textures/sand.png", Bytes::from_static(b"png"), Some("image/png"))
            .await
            .unwrap();
        assert_eq!(meta.size_bytes, 3);

        let obj = store.get("textures/sand.png").await.unwrap().unwrap();
        assert_eq!(obj.name, "textures/sand.png");
        assert_eq!(obj.body, Bytes::from_static(b"png"));
        assert_eq!(obj.metadata.content_type.as_deref(), Some("image/png"));
    }

    #[tokio::test]
    async fn missing_object_is_none() {
        let store = MemoryBlobStore::new();
        assert!(store.get("nope.glb").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn content_type_is_optional() {
        let store = MemoryBlobStore::new();
        store
            .put("blob.bin", Bytes::from_static(b"\x00\x01"), None)
            .await
            .unwrap();
        let obj = store.get("blob.bin").await.unwrap().unwrap();
        assert!(obj.metadata.content_type.is_none());
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let store = MemoryBlobStore::new();
        let err = store.put("", Bytes::new(), None).await.unwrap_err();
        assert!(matches!(err, BlobError::InvalidName(_)));
    }
}
