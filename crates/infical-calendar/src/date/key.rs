//! Canonical `YYYY-MM-DD` date identity.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};
use infical_core::constants::{DATE_KEY_PATTERN, MONTH_KEY_PATTERN};
use infical_core::error::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ## Summary
/// A calendar date identified by its `YYYY-MM-DD` string.
///
/// Equality, hashing and ordering follow the underlying date, so sorting keys
/// sorts chronologically and two keys are equal iff their strings are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// ## Summary
    /// Builds a key from a year, a 1-based month and a day of month.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if the date does not exist, e.g. Feb 30.
    pub fn new(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// 0-based month, January is 0.
    #[must_use]
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// ## Summary
    /// First day of this key's month.
    #[must_use]
    pub fn month_floor(self) -> Self {
        Self(self.0 - Days::new(u64::from(self.0.day0())))
    }

    /// ## Summary
    /// Last day of this key's month.
    #[must_use]
    pub fn month_ceil(self) -> Self {
        let length = days_in_month(self.year(), self.month()).unwrap_or(28);
        Self(self.month_floor().0 + Days::new(u64::from(length - 1)))
    }

    /// ## Summary
    /// Moves the key to `year`, keeping month and day.
    ///
    /// Feb 29 clamps to Feb 28 in non-leap years. Returns `None` only when the
    /// year is outside the supported calendar range.
    #[must_use]
    pub fn with_year(self, year: i32) -> Option<Self> {
        let length = days_in_month(year, self.month()).ok()?;
        NaiveDate::from_ymd_opt(year, self.month(), self.day().min(length)).map(Self)
    }

    /// ## Summary
    /// Adds a signed number of days, `None` on calendar overflow.
    #[must_use]
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(TimeDelta::try_days(days)?)
            .map(Self)
    }

    #[must_use]
    pub fn is_same_month(self, other: Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    #[must_use]
    pub fn is_same_year(self, other: Self) -> bool {
        self.year() == other.year()
    }

    /// ## Summary
    /// `YYYY-MM` form used for month cell identifiers.
    #[must_use]
    pub fn month_key(self) -> String {
        self.0.format(MONTH_KEY_PATTERN).to_string()
    }
}

/// ## Summary
/// Number of days in a month.
///
/// ## Errors
/// Returns `CoreError::InvalidDate` if `month` is not in `1..=12` or the year
/// is outside the supported range.
pub fn days_in_month(year: i32, month: u32) -> CoreResult<u32> {
    let invalid = || CoreError::InvalidDate(format!("{year:04}-{month:02}"));
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(invalid());
    }
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => Ok(29),
        2 => Ok(28),
        _ => Err(invalid()),
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_PATTERN))
    }
}

impl FromStr for DateKey {
    type Err = CoreError;

    /// Accepts only the canonical zero-padded form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidDate(s.to_string());
        if s.len() != 10 {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(s, DATE_KEY_PATTERN).map_err(|_e| invalid())?;
        let key = Self(date);
        if key.to_string() == s {
            Ok(key)
        } else {
            Err(invalid())
        }
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
