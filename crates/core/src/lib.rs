pub mod calendar;
pub mod clock;
pub mod error;
pub mod record;

pub use calendar::{CalendarDay, Season};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use record::{DailyMessageRecord, FALLBACK_TTL, GENERATED_TTL, MessageSource};

/// Parse an IANA timezone name (e.g. `Asia/Tokyo`).
pub fn parse_timezone(name: &str) -> Result<chrono_tz::Tz, CoreError> {
    name.parse::<chrono_tz::Tz>()
        .map_err(|_| CoreError::InvalidTimezone(name.to_owned()))
}
