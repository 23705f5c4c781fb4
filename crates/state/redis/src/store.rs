use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;
use tracing::debug;

use biotope_state::error::StateError;
use biotope_state::key::StateKey;
use biotope_state::store::StateStore;

use crate::config::RedisConfig;
use crate::key_render::render_key;

/// Redis-backed implementation of [`StateStore`].
///
/// Uses a `deadpool-redis` connection pool. TTLs are applied atomically with
/// the write (`SET key value PX ttl`).
pub struct RedisStateStore {
    pool: Pool,
    prefix: String,
}

impl RedisStateStore {
    /// Create a new `RedisStateStore` from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Connection`] if the pool cannot be created.
    pub fn new(config: &RedisConfig) -> Result<Self, StateError> {
        let cfg = Config::from_url(&config.url);
        let pool = cfg
            .builder()
            .map(|b| {
                b.max_size(config.pool_size)
                    .wait_timeout(Some(config.wait_timeout))
                    .runtime(Runtime::Tokio1)
                    .build()
            })
            .map_err(|e| StateError::Connection(e.to_string()))?
            .map_err(|e| StateError::Connection(e.to_string()))?;

        Ok(Self {
            pool,
            prefix: config.prefix.clone(),
        })
    }

    fn redis_key(&self, key: &StateKey) -> String {
        render_key(&self.prefix, key)
    }

    /// Obtain a connection from the pool.
    async fn conn(&self) -> Result<deadpool_redis::Connection, StateError> {
        self.pool
            .get()
            .await
            .map_err(|e| StateError::Connection(e.to_string()))
    }
}

impl std::fmt::Debug for RedisStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStateStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn get(&self, key: &StateKey) -> Result<Option<String>, StateError> {
        let redis_key = self.redis_key(key);
        let mut conn = self.conn().await?;

        conn.get(&redis_key)
            .await
            .map_err(|e| StateError::Backend(e.to_string()))
    }

    async fn set(
        &self,
        key: &StateKey,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StateError> {
        let redis_key = self.redis_key(key);
        let mut conn = self.conn().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(&redis_key).arg(value);
        if let Some(ttl) = ttl {
            // PX 0 is rejected by Redis; clamp to the smallest valid expiry.
            let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
            cmd.arg("PX").arg(ttl_ms);
        }

        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(|e| StateError::Backend(e.to_string()))?;

        debug!(key = %redis_key, ttl = ?ttl, "redis SET");
        Ok(())
    }

    async fn delete(&self, key: &StateKey) -> Result<bool, StateError> {
        let redis_key = self.redis_key(key);
        let mut conn = self.conn().await?;

        let removed: i64 = conn
            .del(&redis_key)
            .await
            .map_err(|e| StateError::Backend(e.to_string()))?;

        Ok(removed > 0)
    }
}
