use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDay;
use crate::error::CoreError;

/// Freshness of a message produced by the generative API (24 hours).
pub const GENERATED_TTL: Duration = Duration::from_secs(86_400);

/// Freshness of a fallback message (1 hour), so a retry happens soon.
pub const FALLBACK_TTL: Duration = Duration::from_secs(3_600);

/// Which code path produced a daily message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSource {
    /// Produced by the generative text API.
    Generated,
    /// Produced by the offline template fallback.
    Fallback,
}

impl MessageSource {
    /// Return a string representation of the source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Fallback => "fallback",
        }
    }

    /// How long a record from this source stays fresh.
    #[must_use]
    pub fn cache_ttl(self) -> Duration {
        match self {
            Self::Generated => GENERATED_TTL,
            Self::Fallback => FALLBACK_TTL,
        }
    }
}

impl fmt::Display for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted message for one calendar date.
///
/// Serialized with camelCase field names; this is also the HTTP body served
/// to clients. Records are only ever replaced whole, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMessageRecord {
    /// `YYYY-MM-DD`; unique key of the record.
    pub date: String,
    /// Localized rendering of the date (month, day, weekday, season).
    pub date_description: String,
    /// The text shown to the end user.
    pub message: String,
    /// ISO 8601 timestamp of when the record was produced.
    pub generated_at: String,
    /// Which code path produced `message`.
    pub source: MessageSource,
    /// Seconds the record is considered fresh.
    pub cache_ttl: u64,
}

impl DailyMessageRecord {
    /// Build a record for `day`, deriving `cache_ttl` from `source`.
    #[must_use]
    pub fn new(
        day: &CalendarDay,
        message: impl Into<String>,
        source: MessageSource,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            date: day.key(),
            date_description: day.description_ja(),
            message: message.into(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source,
            cache_ttl: source.cache_ttl().as_secs(),
        }
    }

    /// TTL as a [`Duration`].
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// `Cache-Control` header value matching this record's freshness.
    #[must_use]
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_ttl)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        serde_json::from_str(raw).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}
