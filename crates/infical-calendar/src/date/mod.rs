//! Date utilities: canonical keys, week arithmetic and month/year enumeration.

mod key;
mod week;

pub use key::{DateKey, days_in_month};
pub use week::{WeekRow, is_same_week, week_end_of, week_start_of};

use infical_core::constants::MONTHS_PER_YEAR;
use infical_core::error::{CoreError, CoreResult};

/// ## Summary
/// One date per month of `year`, each on `anchor_day`.
///
/// The day is clamped to the month's last day, so an anchor of 31 yields
/// Feb 28 or Feb 29 for February.
///
/// ## Errors
/// Returns `CoreError::InvalidDate` if `anchor_day` is not in `1..=31` or the
/// year is outside the supported range.
pub fn months_of_year(year: i32, anchor_day: u32) -> CoreResult<Vec<DateKey>> {
    if !(1..=31).contains(&anchor_day) {
        return Err(CoreError::InvalidDate(format!(
            "anchor day {anchor_day} is outside 1..=31"
        )));
    }
    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    for month in 1..=12 {
        let day = anchor_day.min(days_in_month(year, month)?);
        months.push(DateKey::new(year, month, day)?);
    }
    Ok(months)
}

/// ## Summary
/// Inclusive list of years from `min_year` to `max_year`, empty if inverted.
#[must_use]
pub fn year_range(min_year: i32, max_year: i32) -> Vec<i32> {
    (min_year..=max_year).collect()
}

/// ## Summary
/// Inclusive range membership on keys.
#[must_use]
pub fn is_within(date: DateKey, start: DateKey, end: DateKey) -> bool {
    start <= date && date <= end
}
