//! Month grid properties across many months and both common week starts.

use chrono::Weekday;
use infical_test::component::date::days_in_month;
use infical_test::component::policy::{Constraints, DayPolicy, WeekdayMask};
use infical_test::component::types::SelectionMode;

use super::helpers::*;

#[test_log::test]
fn every_day_appears_once_with_its_weekday() {
    let constraints = Constraints::default();
    for week_start in [Weekday::Sun, Weekday::Mon] {
        let policy = DayPolicy::new(&constraints, SelectionMode::Single, week_start);
        for year in 2020..=2025 {
            for month in 1..=12 {
                let first = key(&format!("{year}-{month:02}-01"));
                let grid = month_grid(first, None, &policy, key("2024-06-15"));

                let days: Vec<u32> = grid.cells().map(|cell| cell.day_of_month).collect();
                let expected: Vec<u32> = (1..=days_in_month(year, month).unwrap()).collect();
                assert_eq!(days, expected, "{year}-{month}");

                for cell in grid.cells() {
                    assert_eq!(cell.weekday, cell.date_key.weekday());
                }
                for row in &grid.rows[1..grid.rows.len() - 1] {
                    assert!(!row.is_partial, "{year}-{month} middle row");
                    assert_eq!(row.cells[0].weekday, week_start);
                }
            }
        }
    }
}

#[test]
fn disabled_cells_match_policy() {
    let constraints = Constraints::new(Some(key("2024-02-07")), Some(key("2024-11-20")))
        .unwrap()
        .with_disabled_weekdays(WeekdayMask::from_indices(&[0, 6]).unwrap())
        .with_disabled_dates([key("2024-07-04"), key("2024-12-25")]);
    let policy = DayPolicy::new(&constraints, SelectionMode::Single, Weekday::Sun);

    for month in 1..=12 {
        let grid = month_grid(key(&format!("2024-{month:02}-01")), None, &policy, key("2024-06-15"));
        for cell in grid.cells() {
            let date = cell.date_key;
            let expected = date < key("2024-02-07")
                || date > key("2024-11-20")
                || matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                || date == key("2024-07-04");
            assert_eq!(cell.is_disabled, expected, "{date}");
        }
    }
}

#[test]
fn today_flag_only_in_its_month() {
    let constraints = Constraints::default();
    let policy = DayPolicy::new(&constraints, SelectionMode::Single, Weekday::Sun);

    let june = month_grid(key("2024-06-01"), None, &policy, key("2024-06-15"));
    let july = month_grid(key("2024-07-01"), None, &policy, key("2024-06-15"));

    assert_eq!(june.cells().filter(|cell| cell.is_today).count(), 1);
    assert_eq!(july.cells().filter(|cell| cell.is_today).count(), 0);
}
