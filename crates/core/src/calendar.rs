use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Season of the year, derived from the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Map a calendar month (1-12) to its season.
    ///
    /// March-May is spring, June-August summer, September-November autumn and
    /// December-February winter. Out-of-range values wrap modulo 12 so the
    /// mapping is total.
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        match month % 12 {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Return a string representation of the season.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    /// Japanese label used in date descriptions.
    #[must_use]
    pub fn label_ja(self) -> &'static str {
        match self {
            Self::Spring => "春",
            Self::Summer => "夏",
            Self::Autumn => "秋",
            Self::Winter => "冬",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn weekday_ja(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "日",
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
    }
}

/// A calendar date.
///
/// Built from an instant plus a zone with [`CalendarDay::in_timezone`] or
/// [`CalendarDay::utc`], or from a known date with [`CalendarDay::from_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
}

impl CalendarDay {
    /// The day `now` falls on in `tz`.
    #[must_use]
    pub fn in_timezone(now: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            date: now.with_timezone(&tz).date_naive(),
        }
    }

    /// The day `now` falls on in UTC.
    #[must_use]
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self {
            date: now.date_naive(),
        }
    }

    /// Wrap an already-resolved date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    #[must_use]
    pub fn season(&self) -> Season {
        Season::from_month(self.month())
    }

    /// Storage and cache key: `YYYY-MM-DD`.
    #[must_use]
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Localized description, e.g. `4月10日（木曜日）、春`.
    #[must_use]
    pub fn description_ja(&self) -> String {
        format!(
            "{}月{}日（{}曜日）、{}",
            self.month(),
            self.day(),
            weekday_ja(self.weekday()),
            self.season().label_ja()
        )
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}
