use biotope_blob::BlobError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectError {
    /// The blob store could not answer; distinct from a missing object.
    #[error("object store error: {0}")]
    Store(#[from] BlobError),
}
