//! Week arithmetic and week rows.

use chrono::Weekday;
use infical_core::constants::DAYS_PER_WEEK;
use infical_core::error::{CoreError, CoreResult};
use serde::Serialize;

use super::key::{DateKey, days_in_month};

/// Days between `week_start` and `day`, walking forward.
fn offset_from(week_start: Weekday, day: Weekday) -> u32 {
    (7 + day.num_days_from_sunday() - week_start.num_days_from_sunday()) % 7
}

/// ## Summary
/// First day of the week containing `date`.
#[must_use]
pub fn week_start_of(date: DateKey, week_start: Weekday) -> DateKey {
    let offset = offset_from(week_start, date.weekday());
    date.add_days(-i64::from(offset)).unwrap_or(date)
}

/// ## Summary
/// Last day of the week containing `date`.
#[must_use]
pub fn week_end_of(date: DateKey, week_start: Weekday) -> DateKey {
    let start = week_start_of(date, week_start);
    start.add_days(6).unwrap_or(date)
}

/// ## Summary
/// True iff `a` and `b` fall in the same week for the given week start.
#[must_use]
pub fn is_same_week(a: DateKey, b: DateKey, week_start: Weekday) -> bool {
    week_start_of(a, week_start) == week_start_of(b, week_start)
}

/// ## Summary
/// One row of a month grid: consecutive day-of-month numbers.
///
/// A row shorter than a full week is a boundary week whose remaining days
/// belong to the adjacent month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekRow(Vec<u32>);

impl WeekRow {
    /// ## Summary
    /// Validates and wraps a row of day numbers.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if the row is empty, longer than a week,
    /// contains a day outside `1..=31`, or is not consecutive.
    pub fn new(days: Vec<u32>) -> CoreResult<Self> {
        if days.is_empty() || days.len() > DAYS_PER_WEEK {
            return Err(CoreError::InvalidDate(format!(
                "week row must hold 1..=7 days, got {}",
                days.len()
            )));
        }
        if let Some(day) = days.iter().find(|day| !(1..=31).contains(*day)) {
            return Err(CoreError::InvalidDate(format!(
                "day {day} is outside 1..=31"
            )));
        }
        if days.windows(2).any(|pair| pair[1] != pair[0] + 1) {
            return Err(CoreError::InvalidDate(format!(
                "week row {days:?} is not consecutive"
            )));
        }
        Ok(Self(days))
    }

    /// ## Summary
    /// Splits a month into week rows starting on `week_start`.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if `month` is not in `1..=12`.
    pub fn for_month(year: i32, month: u32, week_start: Weekday) -> CoreResult<Vec<Self>> {
        let length = days_in_month(year, month)?;
        let first = DateKey::new(year, month, 1)?;
        let lead = offset_from(week_start, first.weekday());

        let mut rows = Vec::with_capacity(6);
        let mut day = 1;
        let mut room = 7 - lead;
        while day <= length {
            let last = (day + room - 1).min(length);
            rows.push(Self((day..=last).collect()));
            day = last + 1;
            room = 7;
        }
        Ok(rows)
    }

    #[must_use]
    pub fn days(&self) -> &[u32] {
        &self.0
    }

    /// Rows are never empty.
    #[must_use]
    pub fn first_day(&self) -> u32 {
        self.0.first().copied().unwrap_or(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.0.len() != DAYS_PER_WEEK
    }
}
