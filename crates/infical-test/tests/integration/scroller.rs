//! Year list scroll offsets and visible windows.

use infical_test::component::date::year_range;
use infical_test::component::selection::Selection;
use infical_test::component::years::{RowHeights, YearList};

use super::helpers::*;

#[test_log::test]
fn fifty_years_center_selected_year() {
    let list = year_list(year_props(1990, 2039, Selection::single(key("2020-05-05"))));
    let layout = list.layout();

    assert_eq!(list.selected_index(), Some(30));
    assert!(!layout.is_year_less);
    assert_eq!(layout.scroll_offset, 30 * 40 - 200 + 40);
    assert!(layout.visible.contains(&30));
    // Two rows of overscan either side of the ten visible rows
    assert_eq!(layout.visible, 24..38);
}

#[test]
fn short_year_list_is_year_less() {
    let list = year_list(year_props(2020, 2029, Selection::single(key("2029-05-05"))));
    let layout = list.layout();

    assert!(layout.is_year_less);
    assert_eq!(layout.scroll_offset, 0);
    assert_eq!(layout.container_height, layout.total_height);
    assert_eq!(layout.visible, 0..10);
}

#[test]
fn months_double_the_row_height() {
    let mut props = year_props(1990, 2039, Selection::single(key("2020-05-05")));
    props.show_months = true;
    let list = year_list(props);

    assert!(list.entries().iter().all(|entry| entry.row_height == 80));
    assert_eq!(list.layout().total_height, 50 * 80);
    assert_eq!(list.layout().scroll_offset, 30 * 80 - 200 + 40);
}

#[test]
fn edge_spacing_only_on_first_and_last_rows() {
    let heights = RowHeights::new(year_range(1900, 2100).len(), 80, 16);
    let walked: i64 = (0..heights.count()).map(|i| i64::from(heights.height_of(i))).sum();

    assert_eq!(heights.total(), walked);
    assert_eq!(heights.height_of(0), 96);
    assert_eq!(heights.height_of(100), 80);
    assert_eq!(heights.height_of(heights.count() - 1), 96);
    assert_eq!(heights.offset_of(100), 100 * 80 + 16);
}

#[test]
fn scrolling_moves_the_window() {
    let list: YearList = year_list(year_props(1990, 2039, Selection::single(key("2020-05-05"))));

    assert_eq!(list.window_at(0), 0..12);
    assert_eq!(list.window_at(800), 18..32);
    assert_eq!(list.window_at(i64::MAX / 2), 38..50);
}
