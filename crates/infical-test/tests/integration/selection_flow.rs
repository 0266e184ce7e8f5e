//! Click-driven selection feeding the grid and the year view.

use chrono::Weekday;
use infical_test::component::policy::{Constraints, DayPolicy};
use infical_test::component::selection::{
    Selection, SelectionController, SelectionState, is_month_selected, normalize,
};
use infical_test::component::types::SelectionMode;

use super::helpers::*;

#[test_log::test]
fn range_clicks_build_a_range_in_the_grid() {
    let constraints = Constraints::default();
    let policy = DayPolicy::new(&constraints, SelectionMode::Range, Weekday::Sun);
    let controller = SelectionController::new(false);
    let mut state = SelectionState::new(SelectionMode::Range, Weekday::Sun, None);
    let mut host = RecordingHost::default();

    for date in [key("2024-03-20"), key("2024-03-05")] {
        controller.select_day(&mut host, &policy, date);
        state.apply(date);
    }

    let selection = state.selection().expect("selection after two clicks");
    assert!(!state.is_pending());
    assert_eq!(selection, Selection::range(key("2024-03-05"), key("2024-03-20")));
    assert_eq!(host.selected_dates(), [key("2024-03-20"), key("2024-03-05")]);

    let grid = month_grid(key("2024-03-01"), Some(&selection), &policy, key("2024-06-15"));
    let selected: Vec<u32> = grid
        .cells()
        .filter(|cell| cell.is_selected)
        .map(|cell| cell.day_of_month)
        .collect();
    assert_eq!(selected, (5..=20).collect::<Vec<_>>());
    let edges: Vec<u32> = grid
        .cells()
        .filter(|cell| cell.is_range_edge)
        .map(|cell| cell.day_of_month)
        .collect();
    assert_eq!(edges, [5, 20]);
}

#[test]
fn range_spanning_months_selects_whole_months_in_year_view() {
    let selection = Selection::range(key("2024-02-20"), key("2024-04-03"));
    let normalized = normalize(&selection, SelectionMode::Range, Weekday::Sun);

    let selected: Vec<u32> = (1..=12)
        .filter(|&month| {
            let date = key(&format!("2024-{month:02}-01"));
            is_month_selected(date, &normalized)
        })
        .collect();
    assert_eq!(selected, [2, 3, 4]);
}

#[test]
fn first_range_click_is_pending() {
    let mut state = SelectionState::new(SelectionMode::Range, Weekday::Sun, None);

    let first = state.apply(key("2024-03-20"));

    assert!(state.is_pending());
    assert_eq!(first, Selection::range(key("2024-03-20"), key("2024-03-20")));
}
