// Date key module
// Canonical YYYY-MM-DD identifier used to group events by day

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Years that fit the four-digit `YYYY` field.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 0..=9999;

/// Errors produced when building a [`DateKey`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateKeyError {
    #[error("date key '{0}' is not in YYYY-MM-DD form")]
    Malformed(String),
    #[error("date key '{0}' does not name a real calendar day")]
    InvalidDate(String),
    #[error("year {0} does not fit a YYYY-MM-DD key")]
    OutOfRange(i32),
}

/// A calendar day, rendered canonically as `YYYY-MM-DD`.
///
/// Ordering follows the calendar, which matches the lexicographic order of the
/// canonical strings. Only years in [`SUPPORTED_YEARS`] are representable, so
/// every key parses back from its own `Display` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Build a key from year, one-based month and day.
    ///
    /// Returns `None` for impossible dates and for years outside
    /// [`SUPPORTED_YEARS`].
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| Self::try_from(date).ok())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// One-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for DateKey {
    type Error = DateKeyError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if SUPPORTED_YEARS.contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(DateKeyError::OutOfRange(date.year()))
        }
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateKeyError::Malformed(s.to_string());

        let mut parts = s.splitn(3, '-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(malformed()),
        };

        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) || !digits(day, 2) {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        let day: u32 = day.parse().map_err(|_| malformed())?;

        Self::from_ymd(year, month, day).ok_or_else(|| DateKeyError::InvalidDate(s.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
