use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, info, instrument, warn};

use biotope_core::{CalendarDay, DailyMessageRecord, MessageSource};
use biotope_llm::TextGenerator;
use biotope_state::{StateKey, StateStore};

use crate::error::DailyError;
use crate::fallback::fallback_message;
use crate::prompt::build_prompt;

/// State namespace holding one record per date.
pub const STATE_NAMESPACE: &str = "daily-message";

/// Whether a response was served from the store or produced on this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    /// Value of the `X-Cache` response header.
    #[must_use]
    pub fn as_header(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_header())
    }
}

/// The outcome of [`DailyMessageService::today`].
#[derive(Debug, Clone)]
pub struct DailyMessage {
    pub record: DailyMessageRecord,
    /// Serialized record. On a hit this is the stored string, untouched.
    pub body: String,
    pub cache: CacheStatus,
}

/// Produces and persists one message per calendar day.
pub struct DailyMessageService {
    store: Arc<dyn StateStore>,
    generator: Option<Arc<dyn TextGenerator>>,
    timezone: Tz,
}

impl DailyMessageService {
    /// Create a service.
    ///
    /// `generator` is `None` when no API credential is configured; every miss
    /// then goes straight to the offline fallback.
    pub fn new(
        store: Arc<dyn StateStore>,
        generator: Option<Arc<dyn TextGenerator>>,
        timezone: Tz,
    ) -> Self {
        Self {
            store,
            generator,
            timezone,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Return the message for the day `now` falls on.
    ///
    /// Concurrent misses for the same day may each generate and write; the
    /// last write wins.
    #[instrument(skip(self), fields(date))]
    pub async fn today(&self, now: DateTime<Utc>) -> Result<DailyMessage, DailyError> {
        let day = CalendarDay::in_timezone(now, self.timezone);
        tracing::Span::current().record("date", tracing::field::display(&day));
        let key = StateKey::new(STATE_NAMESPACE, day.key());

        if let Some(stored) = self.store.get(&key).await? {
            match DailyMessageRecord::from_json(&stored) {
                Ok(record) => {
                    debug!(source = %record.source, "daily message cache hit");
                    return Ok(DailyMessage {
                        record,
                        body: stored,
                        cache: CacheStatus::Hit,
                    });
                }
                Err(e) => warn!(error = %e, "stored daily message is unreadable, regenerating"),
            }
        }

        let (message, source) = self.produce(&day).await;
        let record = DailyMessageRecord::new(&day, message, source, now);
        let body = record.to_json()?;

        self.store.set(&key, &body, Some(record.ttl())).await?;
        info!(source = %source, ttl = record.cache_ttl, "daily message stored");

        Ok(DailyMessage {
            record,
            body,
            cache: CacheStatus::Miss,
        })
    }

    /// Generate the day's text, falling back on any generator failure.
    async fn produce(&self, day: &CalendarDay) -> (String, MessageSource) {
        let Some(generator) = &self.generator else {
            debug!("no generator configured, using fallback");
            return (fallback_message(day), MessageSource::Fallback);
        };

        match generator.generate(&build_prompt(day)).await {
            Ok(text) => (text, MessageSource::Generated),
            Err(e) => {
                warn!(error = %e, "generation failed, using fallback");
                (fallback_message(day), MessageSource::Fallback)
            }
        }
    }
}

impl fmt::Debug for DailyMessageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DailyMessageService")
            .field("generator", &self.generator)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::TimeZone;

    use biotope_llm::{FailingTextGenerator, MockTextGenerator};
    use biotope_state::StateError;
    use biotope_state_memory::MemoryStateStore;

    use super::*;

    fn april_tenth() -> DateTime<Utc> {
        // 09:00 in Tokyo.
        Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap()
    }

    fn tokyo() -> Tz {
        chrono_tz::Asia::Tokyo
    }

    #[tokio::test]
    async fn no_generator_uses_fallback() {
        let store = Arc::new(MemoryStateStore::new());
        let service = DailyMessageService::new(store.clone(), None, tokyo());

        let out = service.today(april_tenth()).await.unwrap();
        assert_eq!(out.cache, CacheStatus::Miss);
        assert_eq!(out.record.source, MessageSource::Fallback);
        assert_eq!(out.record.cache_ttl, 3600);
        assert_eq!(out.record.date, "2025-04-10");
        assert!(out.record.date_description.contains("4月10日"));
        assert_eq!(
            out.record.message,
            fallback_message(&CalendarDay::in_timezone(april_tenth(), tokyo()))
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn generated_message_is_stored_for_a_day() {
        let store = Arc::new(MemoryStateStore::new());
        let generator = Arc::new(MockTextGenerator::new("今日も良い一日を。"));
        let service =
            DailyMessageService::new(store.clone(), Some(generator.clone()), tokyo());

        let out = service.today(april_tenth()).await.unwrap();
        assert_eq!(out.record.source, MessageSource::Generated);
        assert_eq!(out.record.message, "今日も良い一日を。");
        assert_eq!(out.record.cache_ttl, 86_400);
        assert!(
            generator
                .last_prompt()
                .is_some_and(|p| p.contains("4月10日（木曜日）、春"))
        );

        let stored = store
            .get(&StateKey::new(STATE_NAMESPACE, "2025-04-10"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, out.body);
    }

    #[tokio::test]
    async fn second_request_is_a_hit_with_identical_body() {
        let store = Arc::new(MemoryStateStore::new());
        let generator = Arc::new(MockTextGenerator::new("こんにちは。"));
        let service = DailyMessageService::new(store, Some(generator.clone()), tokyo());

        let first = service.today(april_tenth()).await.unwrap();
        let later = april_tenth() + chrono::Duration::hours(5);
        let second = service.today(later).await.unwrap();

        assert_eq!(second.cache, CacheStatus::Hit);
        assert_eq!(second.body, first.body);
        assert_eq!(second.record.message, first.record.message);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn generator_failure_falls_back() {
        let store = Arc::new(MemoryStateStore::new());
        let generator = Arc::new(FailingTextGenerator::new());
        let service = DailyMessageService::new(store, Some(generator.clone()), tokyo());

        let out = service.today(april_tenth()).await.unwrap();
        assert_eq!(out.record.source, MessageSource::Fallback);
        assert_eq!(out.record.cache_ttl, 3600);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn day_boundary_follows_configured_timezone() {
        let store = Arc::new(MemoryStateStore::new());
        let service = DailyMessageService::new(store, None, tokyo());

        // 15:30 UTC on the 9th is 00:30 on the 10th in Tokyo.
        let now = Utc.with_ymd_and_hms(2025, 4, 9, 15, 30, 0).unwrap();
        let out = service.today(now).await.unwrap();
        assert_eq!(out.record.date, "2025-04-10");
    }

    #[tokio::test]
    async fn new_day_gets_a_new_record() {
        let store = Arc::new(MemoryStateStore::new());
        let generator = Arc::new(MockTextGenerator::new("msg"));
        let service = DailyMessageService::new(store.clone(), Some(generator.clone()), tokyo());

        service.today(april_tenth()).await.unwrap();
        let next = service
            .today(april_tenth() + chrono::Duration::days(1))
            .await
            .unwrap();
        assert_eq!(next.cache, CacheStatus::Miss);
        assert_eq!(next.record.date, "2025-04-11");
        assert_eq!(generator.call_count(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_record_expires_after_an_hour() {
        let store = Arc::new(MemoryStateStore::new());
        let service = DailyMessageService::new(store.clone(), None, tokyo());

        service.today(april_tenth()).await.unwrap();
        tokio::time::advance(Duration::from_secs(3_601)).await;

        let again = service.today(april_tenth()).await.unwrap();
        assert_eq!(again.cache, CacheStatus::Miss);
    }

    #[tokio::test]
    async fn unreadable_record_is_replaced() {
        let store = Arc::new(MemoryStateStore::new());
        store
            .set(&StateKey::new(STATE_NAMESPACE, "2025-04-10"), "{broken", None)
            .await
            .unwrap();
        let service = DailyMessageService::new(store, None, tokyo());

        let out = service.today(april_tenth()).await.unwrap();
        assert_eq!(out.cache, CacheStatus::Miss);
        assert_eq!(out.record.source, MessageSource::Fallback);
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl StateStore for BrokenStore {
        async fn get(&self, _key: &StateKey) -> Result<Option<String>, StateError> {
            Err(StateError::Connection("refused".into()))
        }

        async fn set(
            &self,
            _key: &StateKey,
            _value: &str,
            _ttl: Option<Duration>,
        ) -> Result<(), StateError> {
            Err(StateError::Connection("refused".into()))
        }

        async fn delete(&self, _key: &StateKey) -> Result<bool, StateError> {
            Err(StateError::Connection("refused".into()))
        }
    }

    #[tokio::test]
    async fn store_failure_is_an_error() {
        let service = DailyMessageService::new(Arc::new(BrokenStore), None, tokyo());
        let err = service.today(april_tenth()).await.unwrap_err();
        assert!(matches!(err, DailyError::State(StateError::Connection(_))));
    }
}
