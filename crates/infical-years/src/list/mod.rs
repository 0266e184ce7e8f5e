//! ## Summary
//! Virtualized year list, optionally expanded into month cells.
//!
//! The selected-year index is captured once at construction; later prop
//! updates rebuild the entries but keep it, so the list does not jump back
//! to a year the user scrolled away from.

use std::ops::Range;

use chrono::Weekday;
use infical_calendar::date::{DateKey, is_within, months_of_year};
use infical_calendar::format::DateFormatter;
use infical_calendar::policy::{Constraints, DisplayBounds, can_switch_year, is_month_disabled};
use infical_calendar::selection::{
    CalendarHost, ClickOutcome, NormalizedSelection, SelectSource, Selection, SelectionController,
    is_month_selected, normalize,
};
use infical_calendar::theme::{CellStyle, Theme};
use infical_core::constants::{DAY_TITLE_PATTERN, MONTH_SHORT_PATTERN};
use infical_core::error::CoreResult;
use infical_core::types::SelectionMode;
use serde::Serialize;

use crate::heights::RowHeights;
use crate::layout::{YearLayout, YearListLayout, compute_layout, visible_window};

/// Inputs of one year list.
#[derive(Debug, Clone)]
pub struct YearListProps {
    /// Ordered years to list.
    pub years: Vec<i32>,
    pub selection: Selection,
    pub constraints: Constraints,
    pub bounds: DisplayBounds,
    pub today: DateKey,
    pub mode: SelectionMode,
    pub week_start: Weekday,
    pub show_months: bool,
    pub layout: YearLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearEntry {
    pub year: i32,
    pub row_height: u32,
    /// One date per month when months are shown.
    pub months: Option<Vec<DateKey>>,
}

/// Rendered month cell of a year row.
#[expect(clippy::struct_excessive_bools, reason = "one flag per cell state")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub date: DateKey,
    pub label: String,
    /// `YYYY-MM`
    pub data_month: String,
    pub is_selected: bool,
    pub is_current_month: bool,
    pub is_disabled: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_between_range: bool,
    pub is_range: bool,
    pub title: String,
    pub style: CellStyle,
}

/// Rendered year row.
#[expect(clippy::struct_excessive_bools, reason = "one flag per row state")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRow {
    pub index: usize,
    pub year: i32,
    pub height: u32,
    pub is_active: bool,
    pub is_current_year: bool,
    pub with_months: bool,
    pub is_first: bool,
    pub is_last: bool,
    pub can_switch: bool,
    pub title: String,
    pub style: CellStyle,
    pub label_style: CellStyle,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<MonthCell>,
}

/// What the host draws for the current scroll position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearListView {
    pub layout: YearListLayout,
    pub rows: Vec<YearRow>,
}

#[derive(Debug, Clone)]
pub struct YearList {
    props: YearListProps,
    normalized: NormalizedSelection,
    entries: Vec<YearEntry>,
    heights: RowHeights,
    selected_index: Option<usize>,
}

impl YearList {
    /// ## Summary
    /// Builds the list and captures the index of the selected year.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if a listed year cannot hold dates.
    pub fn new(props: YearListProps) -> CoreResult<Self> {
        let normalized = normalize(&props.selection, props.mode, props.week_start);
        let selected_year = normalized.start.year();
        let selected_index = props.years.iter().position(|&year| year == selected_year);
        let entries = build_entries(&props, normalized)?;
        let heights = RowHeights::new(
            entries.len(),
            props.layout.row_height(props.show_months),
            props.layout.spacing,
        );
        tracing::debug!(
            years = entries.len(),
            selected_year,
            ?selected_index,
            show_months = props.show_months,
            "Built year list"
        );

        Ok(Self {
            props,
            normalized,
            entries,
            heights,
            selected_index,
        })
    }

    /// ## Summary
    /// Replaces the props, keeping the selected index captured at construction.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` if a listed year cannot hold dates.
    pub fn update(&mut self, props: YearListProps) -> CoreResult<()> {
        let normalized = normalize(&props.selection, props.mode, props.week_start);
        self.entries = build_entries(&props, normalized)?;
        self.heights = RowHeights::new(
            self.entries.len(),
            props.layout.row_height(props.show_months),
            props.layout.spacing,
        );
        self.normalized = normalized;
        self.props = props;
        Ok(())
    }

    #[must_use]
    pub fn entries(&self) -> &[YearEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn layout(&self) -> YearListLayout {
        compute_layout(&self.heights, &self.props.layout, self.selected_index)
    }

    /// Visible rows once the host has scrolled to `offset`.
    #[must_use]
    pub fn window_at(&self, offset: i64) -> Range<usize> {
        let layout = self.layout();
        if layout.is_year_less {
            return layout.visible;
        }
        visible_window(
            &self.heights,
            offset,
            layout.container_height,
            self.props.layout.overscan,
        )
    }

    #[must_use]
    pub fn can_switch_year(&self, target_year: i32) -> bool {
        can_switch_year(
            &self.props.selection,
            target_year,
            &self.props.constraints,
            self.props.bounds,
        )
    }

    /// ## Summary
    /// Renders the rows of the initial window.
    #[must_use]
    pub fn render(&self, formatter: &dyn DateFormatter, theme: &Theme) -> YearListView {
        let layout = self.layout();
        let rows = self.render_rows(layout.visible.clone(), formatter, theme);
        YearListView { layout, rows }
    }

    /// ## Summary
    /// Renders the rows in `range`, clamped to the list.
    #[must_use]
    pub fn render_rows(
        &self,
        range: Range<usize>,
        formatter: &dyn DateFormatter,
        theme: &Theme,
    ) -> Vec<YearRow> {
        range
            .map_while(|index| {
                self.entries
                    .get(index)
                    .map(|entry| self.render_row(index, entry, formatter, theme))
            })
            .collect()
    }

    /// ## Summary
    /// Handles a click on year row `index`.
    ///
    /// Moves a single selection to that year when allowed; otherwise the
    /// click is ignored.
    pub fn click_year<H: CalendarHost + ?Sized>(
        &self,
        index: usize,
        controller: &SelectionController,
        host: &mut H,
    ) -> ClickOutcome {
        let Some(entry) = self.entries.get(index) else {
            return ClickOutcome::Ignored;
        };
        if !self.can_switch_year(entry.year) {
            tracing::debug!(year = entry.year, "Ignored click on locked year");
            return ClickOutcome::Ignored;
        }
        match self.props.selection.start().with_year(entry.year) {
            Some(date) => controller.select(host, date, SelectSource::Year),
            None => ClickOutcome::Ignored,
        }
    }

    /// ## Summary
    /// Handles a click on month `month_index` of year row `year_index`.
    pub fn click_month<H: CalendarHost + ?Sized>(
        &self,
        year_index: usize,
        month_index: usize,
        controller: &SelectionController,
        host: &mut H,
    ) -> ClickOutcome {
        let date = self
            .entries
            .get(year_index)
            .and_then(|entry| entry.months.as_ref())
            .and_then(|months| months.get(month_index).copied());
        let Some(date) = date else {
            return ClickOutcome::Ignored;
        };
        if self.is_month_disabled(date) {
            tracing::debug!(%date, "Ignored click on disabled month");
            return ClickOutcome::Ignored;
        }
        controller.select(host, date, SelectSource::Month)
    }

    fn is_month_disabled(&self, date: DateKey) -> bool {
        is_month_disabled(date, &self.props.constraints, self.props.bounds)
    }

    fn render_row(
        &self,
        index: usize,
        entry: &YearEntry,
        formatter: &dyn DateFormatter,
        theme: &Theme,
    ) -> YearRow {
        let show_months = self.props.show_months;
        let is_current_year = entry.year == self.props.today.year();
        let can_switch = self.can_switch_year(entry.year);
        let months = entry.months.as_deref().map_or_else(Vec::new, |months| {
            months
                .iter()
                .map(|&date| self.render_month(date, formatter, theme))
                .collect()
        });

        YearRow {
            index,
            year: entry.year,
            height: self.heights.height_of(index),
            is_active: !show_months && self.selected_index == Some(index),
            is_current_year: !show_months && is_current_year,
            with_months: show_months,
            is_first: index == 0,
            is_last: index + 1 == self.entries.len(),
            can_switch,
            title: if can_switch {
                format!("Set year to {}", entry.year)
            } else {
                String::new()
            },
            style: theme.year_style(entry.year),
            label_style: CellStyle {
                border_color: (!show_months && is_current_year).then(|| theme.today_color.clone()),
                ..CellStyle::default()
            },
            months,
        }
    }

    fn render_month(&self, date: DateKey, formatter: &dyn DateFormatter, theme: &Theme) -> MonthCell {
        let normalized = self.normalized;
        let is_selected = is_month_selected(date, &normalized);
        let is_current_month = date.is_same_month(self.props.today);
        let is_start = date.is_same_month(normalized.start);
        let is_end = date.is_same_month(normalized.end);
        let title = if self.props.selection.is_range() {
            String::new()
        } else {
            format!("Set date to {}", formatter.format(date, DAY_TITLE_PATTERN))
        };

        MonthCell {
            date,
            label: formatter.format(date, MONTH_SHORT_PATTERN),
            data_month: date.month_key(),
            is_selected,
            is_current_month,
            is_disabled: self.is_month_disabled(date),
            is_start,
            is_end,
            is_between_range: is_within(date, normalized.start, normalized.end)
                && !is_start
                && !is_end,
            is_range: !(is_start && is_end),
            title,
            style: theme.month_cell_style(date, is_selected, is_current_month),
        }
    }
}

/// Month cells are anchored on the day of the selection start.
fn build_entries(props: &YearListProps, normalized: NormalizedSelection) -> CoreResult<Vec<YearEntry>> {
    let row_height = props.layout.row_height(props.show_months);
    let anchor_day = normalized.start.day();
    props
        .years
        .iter()
        .map(|&year| {
            let months = if props.show_months {
                Some(months_of_year(year, anchor_day)?)
            } else {
                None
            };
            Ok(YearEntry {
                year,
                row_height,
                months,
            })
        })
        .collect()
}
