use std::time::Duration;

pub const DEFAULT_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_PREFIX: &str = "biotope";

/// Connection settings for [`RedisStateStore`](crate::RedisStateStore).
///
/// The daily message service issues one `GET` and at most one `SET` per
/// request, so a small pool is enough.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    /// Prepended to every key as `{prefix}:`.
    pub prefix: String,
    pub pool_size: usize,
    /// How long a request waits for a free pooled connection.
    pub wait_timeout: Duration,
}

impl RedisConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prefix: DEFAULT_PREFIX.to_owned(),
            pool_size: 4,
            wait_timeout: Duration::from_secs(2),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}
