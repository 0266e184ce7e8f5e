//! The demo renderer end to end, from settings to output.

use chrono::Weekday;
use infical_test::component::app::render::{CalendarInputs, render, write_output};
use infical_test::component::config::{
    CalendarConfig, LayoutConfig, LoggingConfig, RenderConfig, Settings, ThemeConfig,
};
use infical_test::component::theme::Theme;
use infical_test::component::types::{OutputFormat, SelectionMode};

use super::helpers::*;

fn settings(mode: SelectionMode) -> Settings {
    Settings {
        calendar: CalendarConfig {
            week_start: Weekday::Mon,
            selection_mode: mode,
            hide_on_select: true,
            show_months: false,
            show_overlay: true,
        },
        layout: LayoutConfig {
            day_row_height: 48,
            year_row_height: 40,
            year_with_months_row_height: 80,
            spacing: 0,
            header_offset: 40,
            viewport_height: 400,
            overscan: 0,
        },
        theme: ThemeConfig {
            selection_color: "#123456".to_string(),
            today_color: "#FFA726".to_string(),
            overlay_color: "#448AFF".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        render: RenderConfig {
            today: Some("2024-06-15".to_string()),
            month: Some("2024-01-01".to_string()),
            selected: Some("2024-01-18".to_string()),
            selected_end: None,
            min_date: Some("2024-01-10".to_string()),
            max_date: None,
            disabled_dates: Vec::new(),
            disabled_weekdays: Vec::new(),
            min_year: 1990,
            max_year: 2039,
            format: OutputFormat::Json,
        },
    }
}

#[test_log::test]
fn weekly_settings_render_rounded_bounds_and_centered_years() {
    let settings = settings(SelectionMode::Weekly);
    assert!(settings.validate().is_ok());

    let inputs = CalendarInputs::from_settings(&settings, key("2000-01-01")).unwrap();
    let rendered = render(&settings, &inputs, &Theme::from(&settings.theme)).unwrap();

    // Monday start: the week of the 10th is partial and disabled
    let first_enabled = rendered
        .month
        .cells()
        .find(|cell| !cell.is_disabled)
        .map(|cell| cell.date_key);
    assert_eq!(first_enabled, Some(key("2024-01-15")));
    assert!(rendered.month.rows[2].is_edge);
    assert_eq!(rendered.years.layout.scroll_offset, 34 * 40 - 200 + 40);
    assert!(rendered.years.rows.iter().any(|row| row.is_active && row.year == 2024));

    let json = write_output(&rendered, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["overlay"]["background_color"], "#448AFF");
    assert_eq!(value["years"]["rows"][0]["style"]["color"], "#123456");
}
