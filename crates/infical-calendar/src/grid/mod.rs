//! ## Summary
//! Month grid builder.
//!
//! Resolves every day cell of a month into a descriptor the host renders:
//! today, disabled, selected and range-edge flags per cell, partial and
//! selected-week edge flags per row, and month-level shading and label.

use chrono::Weekday;
use infical_core::constants::{MONTH_PATTERN, MONTH_YEAR_PATTERN};
use infical_core::error::CoreResult;
use serde::Serialize;

use crate::date::{DateKey, WeekRow, is_same_week};
use crate::format::DateFormatter;
use crate::policy::DayPolicy;
use crate::selection::{NormalizedSelection, Selection, day_bounds};
use crate::theme::{CellStyle, Theme};

/// Inputs for one month.
#[derive(Debug, Clone)]
pub struct MonthGridInput<'a> {
    /// Any day of the month to build.
    pub month_date: DateKey,
    pub rows: &'a [WeekRow],
    pub selection: Option<&'a Selection>,
    pub today: DateKey,
    pub policy: &'a DayPolicy<'a>,
    pub row_height: u32,
}

/// Derived state of one day.
#[expect(clippy::struct_excessive_bools, reason = "one flag per cell state")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date_key: DateKey,
    pub day_of_month: u32,
    pub weekday: Weekday,
    pub is_today: bool,
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_range_edge: bool,
}

impl DayCell {
    /// ## Summary
    /// Selected days get the selection colour as background, today's date
    /// gets the today colour as text.
    #[must_use]
    pub fn style(&self, theme: &Theme) -> CellStyle {
        CellStyle {
            color: self.is_today.then(|| theme.today_color.clone()),
            background_color: self
                .is_selected
                .then(|| theme.selection_color.resolve(self.date_key)),
            border_color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub index: usize,
    pub cells: Vec<DayCell>,
    pub height: u32,
    /// Fewer than seven days; the rest belong to an adjacent month.
    pub is_partial: bool,
    /// Weekly mode only: the row is the first or last selected week.
    pub is_edge: bool,
}

impl GridRow {
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("Week {}", self.index + 1)
    }
}

/// How the month label is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthLabel {
    /// Month in the current year.
    Month,
    MonthAndYear,
}

impl MonthLabel {
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Month => MONTH_PATTERN,
            Self::MonthAndYear => MONTH_YEAR_PATTERN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month_date: DateKey,
    pub rows: Vec<GridRow>,
    /// January, March, ... get alternating shading.
    pub is_even: bool,
    pub label: MonthLabel,
    /// The overlay label shifts when the first row is partial.
    pub partial_first_row: bool,
}

impl MonthGrid {
    /// ## Summary
    /// Hands every cell to a host rendering callback, row by row.
    pub fn render_with<T, F>(&self, mut render: F) -> Vec<Vec<T>>
    where
        F: FnMut(&GridRow, &DayCell) -> T,
    {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(|cell| render(row, cell)).collect())
            .collect()
    }

    #[must_use]
    pub fn label_text(&self, formatter: &dyn DateFormatter) -> String {
        formatter.format(self.month_date, self.label.pattern())
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

/// ## Summary
/// Builds the grid for one month.
///
/// The weekday is computed once per row and stepped per cell. In weekly mode
/// the selection is compared at week granularity and the edge flag is
/// resolved once per row.
///
/// ## Errors
/// Returns `CoreError::InvalidDate` if a row names a day the month lacks.
pub fn build_month_grid(input: &MonthGridInput<'_>) -> CoreResult<MonthGrid> {
    let policy = input.policy;
    let year = input.month_date.year();
    let month = input.month_date.month();
    let weekly = policy.mode().is_weekly();
    let bounds: Option<NormalizedSelection> = input
        .selection
        .map(|selection| day_bounds(selection, policy.mode(), policy.week_start()));

    let mut rows = Vec::with_capacity(input.rows.len());
    for (index, week) in input.rows.iter().enumerate() {
        let first = DateKey::new(year, month, week.first_day())?;
        let mut weekday = first.weekday();
        let is_edge = weekly
            && bounds.is_some_and(|bounds| {
                is_same_week(first, bounds.start, policy.week_start())
                    || is_same_week(first, bounds.end, policy.week_start())
            });

        let mut cells = Vec::with_capacity(week.len());
        for &day in week.days() {
            let date_key = DateKey::new(year, month, day)?;
            cells.push(DayCell {
                date_key,
                day_of_month: day,
                weekday,
                is_today: date_key == input.today,
                is_disabled: policy.is_disabled_on(date_key, weekday),
                is_selected: bounds.is_some_and(|bounds| bounds.contains(date_key)),
                is_range_edge: bounds.is_some_and(|bounds| bounds.is_edge(date_key)),
            });
            weekday = weekday.succ();
        }

        rows.push(GridRow {
            index,
            cells,
            height: input.row_height,
            is_partial: week.is_partial(),
            is_edge,
        });
    }

    let label = if input.month_date.is_same_year(input.today) {
        MonthLabel::Month
    } else {
        MonthLabel::MonthAndYear
    };
    tracing::trace!(
        month = %input.month_date.month_key(),
        rows = rows.len(),
        mode = %policy.mode(),
        "Built month grid"
    );

    Ok(MonthGrid {
        month_date: input.month_date.month_floor(),
        partial_first_row: rows.first().is_some_and(|row| row.is_partial),
        rows,
        is_even: input.month_date.month0() % 2 == 0,
        label,
    })
}
