//! ## Summary
//! Disabled/selectable policy for day cells, month cells and year switching.
//!
//! A day is disabled when any of these hold:
//! - it falls before the effective minimum or after the effective maximum
//! - its weekday is disabled
//! - its key is explicitly disabled
//!
//! In weekly-selection mode the bounds are pulled inwards to whole weeks so
//! that a partial week at either end can never be selected.

use std::collections::HashSet;

use chrono::Weekday;
use infical_core::error::{CoreError, CoreResult};
use infical_core::types::SelectionMode;
use serde::Serialize;

use crate::date::{DateKey, week_end_of, week_start_of};
use crate::selection::Selection;

/// ## Summary
/// Set of disabled weekdays, indexed Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// ## Summary
    /// Builds a mask from Sunday-based indices.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConstraints` for an index above 6.
    pub fn from_indices(indices: &[u8]) -> CoreResult<Self> {
        indices.iter().try_fold(Self::empty(), |mask, index| {
            if *index > 6 {
                Err(CoreError::InvalidConstraints(format!(
                    "weekday index {index} is outside 0..=6"
                )))
            } else {
                Ok(Self(mask.0 | (1 << *index)))
            }
        })
    }

    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & Self::bit(weekday) != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn bit(weekday: Weekday) -> u8 {
        1 << weekday.num_days_from_sunday()
    }
}

/// ## Summary
/// Selection constraints for one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    min_date: Option<DateKey>,
    max_date: Option<DateKey>,
    disabled_dates: HashSet<DateKey>,
    disabled_weekdays: WeekdayMask,
}

impl Constraints {
    /// ## Summary
    /// Creates constraints bounded by optional min and max dates.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConstraints` if `min_date > max_date`.
    pub fn new(min_date: Option<DateKey>, max_date: Option<DateKey>) -> CoreResult<Self> {
        if let (Some(min), Some(max)) = (min_date, max_date)
            && min > max
        {
            tracing::debug!(%min, %max, "Rejected inverted date bounds");
            return Err(CoreError::InvalidConstraints(format!(
                "min_date {min} is after max_date {max}"
            )));
        }
        Ok(Self {
            min_date,
            max_date,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_disabled_dates(mut self, dates: impl IntoIterator<Item = DateKey>) -> Self {
        self.disabled_dates.extend(dates);
        self
    }

    #[must_use]
    pub fn with_disabled_weekdays(mut self, weekdays: WeekdayMask) -> Self {
        self.disabled_weekdays = self.disabled_weekdays.union(weekdays);
        self
    }

}

/// ## Summary
/// Visible range of the year list, independent of what is selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayBounds {
    pub min: Option<DateKey>,
    pub max: Option<DateKey>,
}

impl DisplayBounds {
    #[must_use]
    pub const fn new(min: Option<DateKey>, max: Option<DateKey>) -> Self {
        Self { min, max }
    }
}

/// ## Summary
/// Per-render day policy with the effective bounds computed once.
#[derive(Debug, Clone)]
pub struct DayPolicy<'a> {
    constraints: &'a Constraints,
    mode: SelectionMode,
    week_start: Weekday,
    effective_min: Option<DateKey>,
    effective_max: Option<DateKey>,
}

impl<'a> DayPolicy<'a> {
    #[must_use]
    pub fn new(constraints: &'a Constraints, mode: SelectionMode, week_start: Weekday) -> Self {
        let (effective_min, effective_max) = if mode.is_weekly() {
            (
                constraints.min_date.map(|min| round_up_to_week(min, week_start)),
                constraints.max_date.map(|max| round_down_to_week(max, week_start)),
            )
        } else {
            (constraints.min_date, constraints.max_date)
        };

        Self {
            constraints,
            mode,
            week_start,
            effective_min,
            effective_max,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    #[must_use]
    pub const fn effective_min(&self) -> Option<DateKey> {
        self.effective_min
    }

    #[must_use]
    pub const fn effective_max(&self) -> Option<DateKey> {
        self.effective_max
    }

    /// ## Summary
    /// Decides whether `date` is disabled.
    #[must_use]
    pub fn is_disabled(&self, date: DateKey) -> bool {
        self.is_disabled_on(date, date.weekday())
    }

    /// Same as [`Self::is_disabled`] with a weekday the caller already knows.
    #[must_use]
    pub fn is_disabled_on(&self, date: DateKey, weekday: Weekday) -> bool {
        self.effective_min.is_some_and(|min| date < min)
            || self.effective_max.is_some_and(|max| date > max)
            || self.constraints.disabled_weekdays.contains(weekday)
            || self.constraints.disabled_dates.contains(&date)
    }
}

fn round_up_to_week(min: DateKey, week_start: Weekday) -> DateKey {
    let start = week_start_of(min, week_start);
    if start == min {
        min
    } else {
        start.add_days(7).unwrap_or(min)
    }
}

fn round_down_to_week(max: DateKey, week_start: Weekday) -> DateKey {
    let end = week_end_of(max, week_start);
    if end == max {
        max
    } else {
        end.add_days(-7).unwrap_or(max)
    }
}

/// ## Summary
/// Decides whether `date` is disabled under `constraints`.
///
/// Builds a one-off [`DayPolicy`]; grid builders should hold one per render.
#[must_use]
pub fn is_disabled(
    date: DateKey,
    constraints: &Constraints,
    mode: SelectionMode,
    week_start: Weekday,
) -> bool {
    DayPolicy::new(constraints, mode, week_start).is_disabled(date)
}

/// ## Summary
/// Month-level bound check used by the year view.
///
/// The lower bounds are floored to their month so every month that contains
/// a selectable day stays clickable.
#[must_use]
pub fn is_month_disabled(date: DateKey, constraints: &Constraints, bounds: DisplayBounds) -> bool {
    let below = |min: Option<DateKey>| min.is_some_and(|min| date < min.month_floor());
    let above = |max: Option<DateKey>| max.is_some_and(|max| date > max);

    below(bounds.min)
        || below(constraints.min_date)
        || above(bounds.max)
        || above(constraints.max_date)
}

/// ## Summary
/// Decides whether the year list may move a single selection to `target_year`.
///
/// Ranges never switch year. Only the month-level bounds apply: weekday and
/// explicit-date disables do not block the switch since the day is kept.
#[must_use]
pub fn can_switch_year(
    selection: &Selection,
    target_year: i32,
    constraints: &Constraints,
    bounds: DisplayBounds,
) -> bool {
    let Selection::Single(date) = selection else {
        return false;
    };
    date.with_year(target_year)
        .is_some_and(|moved| !is_month_disabled(moved, constraints, bounds))
}
