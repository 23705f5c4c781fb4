use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use moka::future::Cache;

use biotope_core::CalendarDay;

/// Longest an entry may live; the key also rotates every UTC day.
pub const MAX_ENTRY_TTL: Duration = Duration::from_secs(86_400);

/// Key of a cached response.
///
/// Rendered as `https://{host}/{object}?date={YYYY-MM-DD}` so yesterday's
/// entries are never looked up again once the UTC date changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the cache key for `object_name` on `day`.
#[must_use]
pub fn day_cache_key(namespace_host: &str, object_name: &str, day: &CalendarDay) -> CacheKey {
    CacheKey(format!(
        "https://{namespace_host}/{object_name}?date={}",
        day.key()
    ))
}

/// A successful object response as stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub content_type: String,
    pub cache_control: String,
    pub body: Bytes,
}

/// Shared HTTP response cache.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn lookup(&self, key: &CacheKey) -> Option<CachedResponse>;

    async fn put(&self, key: CacheKey, response: CachedResponse);
}

/// In-process [`ResponseCache`] backed by [`moka`].
///
/// Capacity is measured in bytes (key plus body), and entries expire after at
/// most [`MAX_ENTRY_TTL`].
#[derive(Clone)]
pub struct MemoryResponseCache {
    cache: Cache<CacheKey, CachedResponse>,
}

impl MemoryResponseCache {
    pub fn new(max_capacity_bytes: u64) -> Self {
        Self::with_ttl(max_capacity_bytes, MAX_ENTRY_TTL)
    }

    /// Build a cache with a custom time-to-live, clamped to [`MAX_ENTRY_TTL`].
    pub fn with_ttl(max_capacity_bytes: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity_bytes)
            .weigher(|key: &CacheKey, value: &CachedResponse| -> u32 {
                u32::try_from(key.as_str().len() + value.body.len()).unwrap_or(u32::MAX)
            })
            .time_to_live(ttl.min(MAX_ENTRY_TTL))
            .build();
        Self { cache }
    }

    /// Approximate number of cached entries.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl fmt::Debug for MemoryResponseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryResponseCache")
            .field("entries", &self.cache.entry_count())
            .field("weighted_size", &self.cache.weighted_size())
            .finish()
    }
}

#[async_trait]
impl ResponseCache for MemoryResponseCache {
    async fn lookup(&self, key: &CacheKey) -> Option<CachedResponse> {
        self.cache.get(key).await
    }

    async fn put(&self, key: CacheKey, response: CachedResponse) {
        self.cache.insert(key, response).await;
    }
}
