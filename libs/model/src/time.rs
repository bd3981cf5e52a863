//! Calendar dates, times of day and inclusive date ranges.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// Canonical date format used for calendar keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format used for shift boundaries.
pub const TIME_FORMAT: &str = "%H:%M";

/// Datetime layouts accepted when normalizing to a date key.
const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

// =============================================================================
// DateKey
// =============================================================================

/// A canonical calendar date, rendered as `YYYY-MM-DD`.
///
/// Every way of building a key normalizes to the date part, so a timestamp and
/// its date string produce equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wraps a chrono date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a key from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> ModelResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Parses a date key.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM[:SS]`
    /// local datetimes. Timestamps keep the date in their own offset.
    pub fn parse(input: &str) -> ModelResult<Self> {
        let s = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return Ok(Self(date));
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(ts.date_naive()));
        }

        LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| Self(dt.date()))
            .ok_or_else(|| ModelError::InvalidDate {
                input: input.to_string(),
            })
    }

    /// Returns the underlying chrono date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the following calendar day.
    #[must_use]
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl std::str::FromStr for DateKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for DateKey {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateKey {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// ShiftTime
// =============================================================================

/// A time of day with minute precision, rendered as `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftTime(NaiveTime);

impl ShiftTime {
    /// Builds a time from hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> ModelResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidTime {
                input: format!("{hour:02}:{minute:02}"),
            })
    }

    /// Parses `HH:mm`.
    pub fn parse(input: &str) -> ModelResult<Self> {
        NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
            .map(Self)
            .map_err(|_| ModelError::InvalidTime {
                input: input.to_string(),
            })
    }

    /// Returns the underlying chrono time.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.0
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_from_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl std::fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl std::str::FromStr for ShiftTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ShiftTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShiftTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// DateRange
// =============================================================================

/// An inclusive `[start, end]` window of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: DateKey,
    end: DateKey,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: DateKey, end: DateKey) -> ModelResult<Self> {
        if start > end {
            return Err(ModelError::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The range covering a single day.
    #[must_use]
    pub const fn day(date: DateKey) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub const fn start(&self) -> DateKey {
        self.start
    }

    pub const fn end(&self) -> DateKey {
        self.end
    }

    /// Returns true if `date` lies within the range, boundaries included.
    pub fn contains(&self, date: DateKey) -> bool {
        self.start <= date && date <= self.end
    }

    /// Applies an optional range filter; `None` admits every date.
    pub fn admits(range: Option<&DateRange>, date: DateKey) -> bool {
        range.is_none_or(|r| r.contains(date))
    }
}
