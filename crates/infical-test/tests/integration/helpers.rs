#![allow(dead_code, clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Provides:
//! - Date key parsing
//! - A host that records callbacks and queues frame tasks
//! - Builders for year lists and month grids

use chrono::Weekday;
use infical_test::component::date::{DateKey, WeekRow, year_range};
use infical_test::component::grid::{MonthGrid, MonthGridInput, build_month_grid};
use infical_test::component::policy::{Constraints, DayPolicy, DisplayBounds};
use infical_test::component::selection::{
    CalendarHost, FrameQueue, FrameTask, ScrollRequest, SelectSource, Selection,
};
use infical_test::component::types::SelectionMode;
use infical_test::component::years::{YearLayout, YearList, YearListProps};

pub fn key(s: &str) -> DateKey {
    s.parse().expect("valid date key")
}

/// One recorded host callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Select {
        date: DateKey,
        source: SelectSource,
        scroll: Option<ScrollRequest>,
    },
    Frame(FrameTask),
}

/// Host that records every callback in order and queues frame tasks.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    pub frames: FrameQueue,
}

impl CalendarHost for RecordingHost {
    fn on_select(&mut self, date: DateKey, source: SelectSource, scroll: Option<ScrollRequest>) {
        self.events.push(HostEvent::Select {
            date,
            source,
            scroll,
        });
    }

    fn request_animation_frame(&mut self, task: FrameTask) {
        self.events.push(HostEvent::Frame(task));
        self.frames.push(task);
    }
}

impl RecordingHost {
    pub fn selected_dates(&self) -> Vec<DateKey> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Select { date, .. } => Some(*date),
                HostEvent::Frame(_) => None,
            })
            .collect()
    }
}

pub fn layout(viewport_height: u32) -> YearLayout {
    YearLayout {
        year_row_height: 40,
        year_with_months_row_height: 80,
        spacing: 0,
        header_offset: 40,
        viewport_height,
        overscan: 2,
    }
}

pub fn year_props(min_year: i32, max_year: i32, selection: Selection) -> YearListProps {
    YearListProps {
        years: year_range(min_year, max_year),
        selection,
        constraints: Constraints::default(),
        bounds: DisplayBounds::default(),
        today: key("2024-06-15"),
        mode: SelectionMode::Single,
        week_start: Weekday::Sun,
        show_months: false,
        layout: layout(400),
    }
}

pub fn year_list(props: YearListProps) -> YearList {
    YearList::new(props).expect("year list builds")
}

/// Builds the grid of `month` (any day of it) under `policy`.
pub fn month_grid(
    month: DateKey,
    selection: Option<&Selection>,
    policy: &DayPolicy<'_>,
    today: DateKey,
) -> MonthGrid {
    let rows = WeekRow::for_month(month.year(), month.month(), policy.week_start())
        .expect("rows for month");
    build_month_grid(&MonthGridInput {
        month_date: month,
        rows: &rows,
        selection,
        today,
        policy,
        row_height: 56,
    })
    .expect("grid builds")
}
