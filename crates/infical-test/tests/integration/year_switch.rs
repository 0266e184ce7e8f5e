//! Year switching through the year list.

use infical_test::component::policy::{Constraints, DisplayBounds, can_switch_year};
use infical_test::component::selection::{
    ClickOutcome, FrameTask, ScrollRequest, SelectSource, Selection, SelectionController,
};

use super::helpers::*;

#[test_log::test]
fn year_click_selects_before_switching_view() {
    let list = year_list(year_props(2020, 2030, Selection::single(key("2024-03-15"))));
    let mut host = RecordingHost::default();

    let outcome = list.click_year(6, &SelectionController::new(true), &mut host);

    assert_eq!(outcome, ClickOutcome::Selected(key("2026-03-15")));
    assert_eq!(
        host.events,
        [
            HostEvent::Select {
                date: key("2026-03-15"),
                source: SelectSource::Year,
                scroll: Some(ScrollRequest {
                    date: key("2026-03-15")
                }),
            },
            HostEvent::Frame(FrameTask::ShowDays),
        ]
    );
    assert_eq!(host.frames.run_frame(), [FrameTask::ShowDays]);
    assert!(host.frames.run_frame().is_empty());
}

#[test]
fn ranges_never_switch_year() {
    let selection = Selection::range(key("2024-03-01"), key("2024-04-15"));
    let list = year_list(year_props(2000, 2050, selection));
    let mut host = RecordingHost::default();

    for index in 0..list.entries().len() {
        assert_eq!(list.click_year(index, &SelectionController::new(true), &mut host), ClickOutcome::Ignored);
    }
    assert!(host.events.is_empty());
    assert!(!can_switch_year(&selection, 2024, &Constraints::default(), DisplayBounds::default()));
}

#[test]
fn leap_day_lands_on_february_28th() {
    let list = year_list(year_props(2020, 2030, Selection::single(key("2024-02-29"))));
    let mut host = RecordingHost::default();

    list.click_year(5, &SelectionController::new(false), &mut host);
    list.click_year(8, &SelectionController::new(false), &mut host);

    assert_eq!(host.selected_dates(), [key("2025-02-28"), key("2028-02-29")]);
    assert!(host.frames.is_empty());
}

#[test]
fn display_bounds_and_constraints_both_gate_years() {
    let mut props = year_props(2015, 2030, Selection::single(key("2024-08-20")));
    props.bounds = DisplayBounds::new(None, Some(key("2027-12-31")));
    props.constraints = Constraints::new(Some(key("2018-08-25")), None).unwrap();
    let list = year_list(props);

    let allowed: Vec<i32> = (2015..=2030).filter(|&year| list.can_switch_year(year)).collect();
    // The minimum is compared at month granularity, so August 2018 stays open
    assert_eq!(allowed, (2018..=2027).collect::<Vec<_>>());
}

#[test]
fn month_click_scrolls_to_month() {
    let mut props = year_props(2020, 2030, Selection::single(key("2024-03-15")));
    props.show_months = true;
    props.constraints = Constraints::new(None, Some(key("2026-06-30"))).unwrap();
    let list = year_list(props);
    let controller = SelectionController::new(true);
    let mut host = RecordingHost::default();

    // 2026-07-15 is past the maximum
    assert_eq!(list.click_month(6, 6, &controller, &mut host), ClickOutcome::Ignored);
    assert_eq!(
        list.click_month(6, 5, &controller, &mut host),
        ClickOutcome::Selected(key("2026-06-15"))
    );
    assert_eq!(host.selected_dates(), [key("2026-06-15")]);
}
