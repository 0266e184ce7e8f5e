//! ## Summary
//! Range/week selection engine.
//!
//! Holds the current selection, normalizes it for membership tests at day,
//! week or month granularity, and forwards clicks to the host.

mod host;

pub use host::{
    CalendarHost, ClickOutcome, FrameQueue, FrameTask, ScrollRequest, SelectSource,
    SelectionController,
};

use chrono::Weekday;
use infical_core::types::SelectionMode;
use serde::{Deserialize, Serialize};

use crate::date::{DateKey, is_within, week_end_of, week_start_of};

/// ## Summary
/// The current selection: one day or an inclusive range with `start <= end`.
///
/// Deserialized ranges are reordered like [`Selection::range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "RawSelection")]
pub enum Selection {
    Single(DateKey),
    Range { start: DateKey, end: DateKey },
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawSelection {
    Single(DateKey),
    Range { start: DateKey, end: DateKey },
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        match raw {
            RawSelection::Single(date) => Self::Single(date),
            RawSelection::Range { start, end } => Self::range(start, end),
        }
    }
}

impl Selection {
    #[must_use]
    pub const fn single(date: DateKey) -> Self {
        Self::Single(date)
    }

    /// ## Summary
    /// Builds a range from two bounds in either order.
    #[must_use]
    pub fn range(a: DateKey, b: DateKey) -> Self {
        Self::Range {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// ## Summary
    /// The whole week containing `date`.
    #[must_use]
    pub fn week_of(date: DateKey, week_start: Weekday) -> Self {
        Self::Range {
            start: week_start_of(date, week_start),
            end: week_end_of(date, week_start),
        }
    }

    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    #[must_use]
    pub const fn start(&self) -> DateKey {
        match *self {
            Self::Single(date) | Self::Range { start: date, .. } => date,
        }
    }

    #[must_use]
    pub const fn end(&self) -> DateKey {
        match *self {
            Self::Single(date) | Self::Range { end: date, .. } => date,
        }
    }
}

/// ## Summary
/// Inclusive bounds derived from a [`Selection`] for membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NormalizedSelection {
    pub start: DateKey,
    pub end: DateKey,
}

impl NormalizedSelection {
    #[must_use]
    pub fn contains(&self, date: DateKey) -> bool {
        is_within(date, self.start, self.end)
    }

    /// True when `date` is one of the two bounds.
    #[must_use]
    pub fn is_edge(&self, date: DateKey) -> bool {
        date == self.start || date == self.end
    }
}

/// ## Summary
/// Normalizes a selection for the year view.
///
/// A single date maps to itself. A range is widened to whole months, so a
/// month is selected when it lies in `[month_floor(start), month_ceil(end)]`.
/// In weekly mode both bounds are widened to whole weeks instead.
#[must_use]
pub fn normalize(selection: &Selection, mode: SelectionMode, week_start: Weekday) -> NormalizedSelection {
    if mode.is_weekly() {
        return week_bounds(selection, week_start);
    }
    match *selection {
        Selection::Single(date) => NormalizedSelection {
            start: date,
            end: date,
        },
        Selection::Range { start, end } => NormalizedSelection {
            start: start.month_floor(),
            end: end.month_ceil(),
        },
    }
}

/// ## Summary
/// Normalizes a selection for the day grid.
///
/// Bounds are kept as-is except in weekly mode, where they are widened to
/// the full weeks containing them.
#[must_use]
pub fn day_bounds(selection: &Selection, mode: SelectionMode, week_start: Weekday) -> NormalizedSelection {
    if mode.is_weekly() {
        week_bounds(selection, week_start)
    } else {
        NormalizedSelection {
            start: selection.start(),
            end: selection.end(),
        }
    }
}

fn week_bounds(selection: &Selection, week_start: Weekday) -> NormalizedSelection {
    NormalizedSelection {
        start: week_start_of(selection.start(), week_start),
        end: week_end_of(selection.end(), week_start),
    }
}

/// ## Summary
/// Inclusive membership of a month entry in a normalized selection.
#[must_use]
pub fn is_month_selected(month_date: DateKey, normalized: &NormalizedSelection) -> bool {
    normalized.contains(month_date)
}

/// ## Summary
/// Click-driven selection state.
///
/// Single mode replaces the date, range mode alternates between setting the
/// start and completing the range, weekly mode selects the whole week.
#[derive(Debug, Clone)]
pub struct SelectionState {
    mode: SelectionMode,
    week_start: Weekday,
    selection: Option<Selection>,
    pending_start: Option<DateKey>,
}

impl SelectionState {
    #[must_use]
    pub const fn new(mode: SelectionMode, week_start: Weekday, initial: Option<Selection>) -> Self {
        Self {
            mode,
            week_start,
            selection: initial,
            pending_start: None,
        }
    }

    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// True between the first and second click of a range.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_start.is_some()
    }

    /// ## Summary
    /// Applies a click on `date` and returns the resulting selection.
    pub fn apply(&mut self, date: DateKey) -> Selection {
        let next = match self.mode {
            SelectionMode::Single => Selection::Single(date),
            SelectionMode::Weekly => Selection::week_of(date, self.week_start),
            SelectionMode::Range => match self.pending_start.take() {
                Some(start) => Selection::range(start, date),
                None => {
                    self.pending_start = Some(date);
                    Selection::range(date, date)
                }
            },
        };
        tracing::debug!(mode = %self.mode, %date, pending = self.is_pending(), "Applied selection click");
        self.selection = Some(next);
        next
    }
}
