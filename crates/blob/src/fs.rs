use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::BlobError;
use crate::store::BlobStore;
use crate::types::{ObjectMetadata, StoredObject};

/// Longest object name accepted; longer names cannot exist on common filesystems.
pub const MAX_NAME_BYTES: usize = 1024;

/// Content type guessed from the file extension; `None` when unknown.
fn content_type_for(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_owned())
}

/// I/O errors that mean "no object by this name" rather than a store failure.
fn is_absent(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::NotFound
            | ErrorKind::IsADirectory
            | ErrorKind::NotADirectory
            | ErrorKind::InvalidFilename
            | ErrorKind::InvalidInput
    )
}

/// [`BlobStore`] that maps object names onto files below a root directory.
///
/// Content types are guessed from the file extension; the `content_type`
/// argument to [`put`](BlobStore::put) is not persisted.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` below the root, rejecting anything that could escape it.
    fn resolve(&self, name: &str) -> Result<PathBuf, BlobError> {
        if name.len() > MAX_NAME_BYTES || name.contains('\0') {
            return Err(BlobError::InvalidName(name.to_owned()));
        }
        let relative = Path::new(name);
        let mut normal = 0usize;
        for component in relative.components() {
            match component {
                Component::Normal(_) => normal += 1,
                _ => return Err(BlobError::InvalidName(name.to_owned())),
            }
        }
        if normal == 0 {
            return Err(BlobError::InvalidName(name.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn get(&self, name: &str) -> Result<Option<StoredObject>, BlobError> {
        let path = self.resolve(name)?;

        let body = match tokio::fs::read(&path).await {
            Ok(data) => Bytes::from(data),
            Err(e) if is_absent(e.kind()) => {
                debug!(path = %path.display(), error = %e, "blob not found on disk");
                return Ok(None);
            }
            Err(e) => return Err(BlobError::Io(e)),
        };

        let uploaded_at = tokio::fs::metadata(&path)
            .await
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);

        Ok(Some(StoredObject {
            name: name.to_owned(),
            metadata: ObjectMetadata {
                content_type: content_type_for(&path),
                size_bytes: body.len() as u64,
                uploaded_at,
            },
            body,
        }))
    }

    async fn put(
        &self,
        name: &str,
        data: Bytes,
        _content_type: Option<&str>,
    ) -> Result<ObjectMetadata, BlobError> {
        let path = self.resolve(name)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &data).await?;

        Ok(ObjectMetadata {
            content_type: content_type_for(&path),
            size_bytes: data.len() as u64,
            uploaded_at: Some(Utc::now()),
        })
    }
}
