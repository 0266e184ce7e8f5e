//! Weekly mode: bounds round inward to whole weeks and edge rows follow the
//! selected weeks.

use chrono::Weekday;
use infical_test::component::policy::{Constraints, DayPolicy};
use infical_test::component::selection::{ClickOutcome, SelectionController, SelectionState};
use infical_test::component::types::SelectionMode;

use super::helpers::*;

#[test_log::test]
fn partial_weeks_at_bounds_are_disabled() {
    // Wednesday minimum, Wednesday maximum
    let constraints = Constraints::new(Some(key("2024-01-10")), Some(key("2024-01-24"))).unwrap();
    let policy = DayPolicy::new(&constraints, SelectionMode::Weekly, Weekday::Sun);
    let grid = month_grid(key("2024-01-01"), None, &policy, key("2024-06-15"));

    let enabled: Vec<u32> = grid
        .cells()
        .filter(|cell| !cell.is_disabled)
        .map(|cell| cell.day_of_month)
        .collect();
    assert_eq!(enabled, (14..=20).collect::<Vec<_>>());
}

#[test]
fn weekly_click_selects_week_and_marks_edge_row() {
    let constraints = Constraints::default();
    let policy = DayPolicy::new(&constraints, SelectionMode::Weekly, Weekday::Mon);
    let mut state = SelectionState::new(SelectionMode::Weekly, Weekday::Mon, None);

    let selection = state.apply(key("2024-01-18"));
    assert_eq!(selection.start(), key("2024-01-15"));
    assert_eq!(selection.end(), key("2024-01-21"));

    let grid = month_grid(key("2024-01-01"), Some(&selection), &policy, key("2024-06-15"));
    let edges: Vec<usize> = grid
        .rows
        .iter()
        .filter(|row| row.is_edge)
        .map(|row| row.index)
        .collect();
    assert_eq!(edges, [2]);
    let selected = grid.cells().filter(|cell| cell.is_selected).count();
    assert_eq!(selected, 7);
}

#[test]
fn disabled_day_click_reaches_no_host() {
    let constraints = Constraints::new(Some(key("2024-01-10")), None).unwrap();
    let policy = DayPolicy::new(&constraints, SelectionMode::Weekly, Weekday::Sun);
    let mut host = RecordingHost::default();

    let outcome = SelectionController::new(true).select_day(&mut host, &policy, key("2024-01-12"));

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(host.events.is_empty());
}
