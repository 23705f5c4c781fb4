use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use biotope_blob::{BlobError, BlobStore};
use biotope_core::CalendarDay;

use crate::cache::{CachedResponse, ResponseCache, day_cache_key};
use crate::error::ObjectError;

/// Content type used when the store has no metadata for an object.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// `Cache-Control` sent with every object served.
pub const OBJECT_CACHE_CONTROL: &str = "public, max-age=86400";

/// Body returned for a request with an empty object name.
pub const WELCOME_MESSAGE: &str =
    "Biotope object cache. Request /<objectName> to fetch a stored object.";

/// Default host component of cache keys.
pub const DEFAULT_NAMESPACE_HOST: &str = "object-cache.internal";

/// Result of an object lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectLookup {
    /// Empty name; the store was not consulted.
    Welcome,
    /// Served from the response cache; the store was not consulted.
    Cached(CachedResponse),
    /// Read from the store and written to the cache.
    Fresh(CachedResponse),
    /// The store has no such object. Nothing was cached.
    NotFound(String),
}

/// Read-through proxy from a blob store to a day-scoped response cache.
pub struct ObjectCacheProxy {
    blobs: Arc<dyn BlobStore>,
    cache: Arc<dyn ResponseCache>,
    namespace_host: String,
}

impl ObjectCacheProxy {
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        cache: Arc<dyn ResponseCache>,
        namespace_host: impl Into<String>,
    ) -> Self {
        Self {
            blobs,
            cache,
            namespace_host: namespace_host.into(),
        }
    }

    /// Look up `object_name` as of `now`.
    ///
    /// `object_name` is the decoded request path without its leading slash.
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        object_name: &str,
        now: DateTime<Utc>,
    ) -> Result<ObjectLookup, ObjectError> {
        if object_name.is_empty() {
            return Ok(ObjectLookup::Welcome);
        }

        let key = day_cache_key(&self.namespace_host, object_name, &CalendarDay::utc(now));
        if let Some(hit) = self.cache.lookup(&key).await {
            debug!(key = %key, "object cache hit");
            return Ok(ObjectLookup::Cached(hit));
        }

        let object = match self.blobs.get(object_name).await {
            Ok(Some(object)) => object,
            Ok(None) => return Ok(ObjectLookup::NotFound(object_name.to_owned())),
            Err(BlobError::InvalidName(reason)) => {
                debug!(reason = %reason, "object name cannot exist in the store");
                return Ok(ObjectLookup::NotFound(object_name.to_owned()));
            }
            Err(e) => return Err(e.into()),
        };

        let response = CachedResponse {
            content_type: object
                .metadata
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
            cache_control: OBJECT_CACHE_CONTROL.to_owned(),
            body: object.body,
        };
        debug!(key = %key, bytes = response.body.len(), "object cache miss, storing");
        self.cache.put(key, response.clone()).await;

        Ok(ObjectLookup::Fresh(response))
    }
}

impl fmt::Debug for ObjectCacheProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCacheProxy")
            .field("namespace_host", &self.namespace_host)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use bytes::Bytes;
    use chrono::TimeZone;

    use biotope_blob::{MemoryBlobStore, ObjectMetadata, StoredObject};

    use super::*;
    use crate::cache::MemoryResponseCache;

    /// Wraps a memory store and counts reads.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryBlobStore,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl BlobStore for CountingStore {
        async fn get(&self, name: &str) -> Result<Option<StoredObject>, BlobError> {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.inner.get(name).await
        }

        async fn put(
            &self,
            name: &str,
            data: Bytes,
            content_type: Option<&str>,
        ) -> Result<ObjectMetadata, BlobError> {
            self.inner.put(name, data, content_type).await
        }
    }

    struct FailingStore;

    #[async_trait]
    impl BlobStore for FailingStore {
        async fn get(&self, _name: &str) -> Result<Option<StoredObject>, BlobError> {
            Err(BlobError::Storage("bucket unavailable".into()))
        }

        async fn put(
            &self,
            _name: &str,
            _data: Bytes,
            _content_type: Option<&str>,
        ) -> Result<ObjectMetadata, BlobError> {
            Err(BlobError::Storage("bucket unavailable".into()))
        }
    }

    fn noon(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, day, 12, 0, 0).unwrap()
    }

    async fn setup() -> (Arc<CountingStore>, Arc<MemoryResponseCache>, ObjectCacheProxy) {
        let store = Arc::new(CountingStore::default());
        store
            .put("textures/koi.png", Bytes::from_static(b"\x89PNG"), Some("image/png"))
            .await
            .unwrap();
        store
            .put("data/raw.bin", Bytes::from_static(b"\x00\x01"), None)
            .await
            .unwrap();
        let cache = Arc::new(MemoryResponseCache::new(1024 * 1024));
        let proxy = ObjectCacheProxy::new(store.clone(), cache.clone(), DEFAULT_NAMESPACE_HOST);
        (store, cache, proxy)
    }

    #[tokio::test]
    async fn empty_name_is_welcome_without_store_read() {
        let (store, _, proxy) = setup().await;
        assert_eq!(proxy.fetch("", noon(10)).await.unwrap(), ObjectLookup::Welcome);
        assert_eq!(store.reads.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn second_fetch_same_day_is_served_from_cache() {
        let (store, _, proxy) = setup().await;

        let first = proxy.fetch("textures/koi.png", noon(10)).await.unwrap();
        let ObjectLookup::Fresh(fresh) = first else {
            panic!("expected a fresh response, got {first:?}");
        };
        assert_eq!(fresh.content_type, "image/png");
        assert_eq!(fresh.cache_control, OBJECT_CACHE_CONTROL);
        assert_eq!(fresh.body, Bytes::from_static(b"\x89PNG"));

        let later = Utc.with_ymd_and_hms(2025, 4, 10, 23, 59, 0).unwrap();
        let second = proxy.fetch("textures/koi.png", later).await.unwrap();
        assert_eq!(second, ObjectLookup::Cached(fresh));
        assert_eq!(store.reads.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn next_utc_day_reads_the_store_again() {
        let (store, _, proxy) = setup().await;

        proxy.fetch("textures/koi.png", noon(10)).await.unwrap();
        let next = proxy.fetch("textures/koi.png", noon(11)).await.unwrap();
        assert!(matches!(next, ObjectLookup::Fresh(_)));
        assert_eq!(store.reads.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn missing_object_is_not_cached() {
        let (store, cache, proxy) = setup().await;

        let lookup = proxy.fetch("nope.glb", noon(10)).await.unwrap();
        assert_eq!(lookup, ObjectLookup::NotFound("nope.glb".into()));

        proxy.fetch("nope.glb", noon(10)).await.unwrap();
        assert_eq!(store.reads.load(Ordering::Relaxed), 2);
        let key = day_cache_key(DEFAULT_NAMESPACE_HOST, "nope.glb", &CalendarDay::utc(noon(10)));
        assert!(cache.lookup(&key).await.is_none());
    }

    #[tokio::test]
    async fn unknown_content_type_defaults_to_octet_stream() {
        let (_, _, proxy) = setup().await;
        let lookup = proxy.fetch("data/raw.bin", noon(10)).await.unwrap();
        let ObjectLookup::Fresh(response) = lookup else {
            panic!("expected a fresh response");
        };
        assert_eq!(response.content_type, DEFAULT_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn store_failure_is_an_error() {
        let cache = Arc::new(MemoryResponseCache::new(1024));
        let proxy = ObjectCacheProxy::new(Arc::new(FailingStore), cache, DEFAULT_NAMESPACE_HOST);
        let err = proxy.fetch("a.png", noon(10)).await.unwrap_err();
        assert!(matches!(err, ObjectError::Store(BlobError::Storage(_))));
    }
}
