//! Object cache proxy.
//!
//! Serves named objects from a [`BlobStore`](biotope_blob::BlobStore) through a
//! [`ResponseCache`] whose keys embed the UTC date, so every object is read
//! from the store at most once per day per cache.

pub mod cache;
pub mod error;
pub mod proxy;

pub use cache::{CacheKey, CachedResponse, MemoryResponseCache, ResponseCache, day_cache_key};
pub use error::ObjectError;
pub use proxy::{
    DEFAULT_CONTENT_TYPE, DEFAULT_NAMESPACE_HOST, OBJECT_CACHE_CONTROL, ObjectCacheProxy,
    ObjectLookup, WELCOME_MESSAGE,
};
