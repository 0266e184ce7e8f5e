//! ## Summary
//! Builds the calendar described by [`Settings`] and writes it out.
//!
//! One run renders the configured month as a day grid and the configured
//! year range as a virtualized year list, as text or JSON.

use std::fmt::Write as _;

use infical_calendar::date::{DateKey, WeekRow, year_range};
use infical_calendar::format::ChronoFormatter;
use infical_calendar::grid::{DayCell, MonthGrid, MonthGridInput, build_month_grid};
use infical_calendar::policy::{Constraints, DayPolicy, DisplayBounds, WeekdayMask};
use infical_calendar::selection::Selection;
use infical_calendar::theme::{CellStyle, Theme};
use infical_core::config::Settings;
use infical_core::constants::DAYS_PER_WEEK;
use infical_core::types::{OutputFormat, SelectionMode};
use infical_years::layout::YearLayout;
use infical_years::list::{YearList, YearListProps, YearListView};
use serde::Serialize;

use crate::error::AppResult;

/// Dates resolved from the render settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInputs {
    pub today: DateKey,
    /// Any day of the month to draw.
    pub month: DateKey,
    pub selection: Selection,
    pub constraints: Constraints,
    pub bounds: DisplayBounds,
}

impl CalendarInputs {
    /// ## Summary
    /// Parses the render settings, falling back to `today` for unset dates.
    ///
    /// A selection end turns the selection into a range; weekly mode always
    /// selects the whole week of the selected date.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidDate` for a malformed date and
    /// `CoreError::InvalidConstraints` for inverted bounds or bad weekdays.
    pub fn from_settings(settings: &Settings, today: DateKey) -> AppResult<Self> {
        let render = &settings.render;
        let today = parse_or(render.today.as_deref(), today)?;
        let selected = parse_or(render.selected.as_deref(), today)?;
        let selected_end = parse(render.selected_end.as_deref())?;
        let selection = match (settings.calendar.selection_mode, selected_end) {
            (SelectionMode::Weekly, _) => {
                Selection::week_of(selected, settings.calendar.week_start)
            },
            (SelectionMode::Range, Some(end)) => Selection::range(selected, end),
            _ => Selection::single(selected),
        };
        let month = parse_or(render.month.as_deref(), selection.start())?;

        let disabled_dates = render
            .disabled_dates
            .iter()
            .map(|date| date.parse::<DateKey>())
            .collect::<Result<Vec<_>, _>>()?;
        let constraints = Constraints::new(
            parse(render.min_date.as_deref())?,
            parse(render.max_date.as_deref())?,
        )?
        .with_disabled_dates(disabled_dates)
        .with_disabled_weekdays(WeekdayMask::from_indices(&render.disabled_weekdays)?);

        let bounds = DisplayBounds::new(
            Some(DateKey::new(render.min_year, 1, 1)?),
            Some(DateKey::new(render.max_year, 12, 31)?),
        );

        Ok(Self {
            today,
            month,
            selection,
            constraints,
            bounds,
        })
    }
}

fn parse(value: Option<&str>) -> AppResult<Option<DateKey>> {
    Ok(value.map(str::parse::<DateKey>).transpose()?)
}

fn parse_or(value: Option<&str>, fallback: DateKey) -> AppResult<DateKey> {
    Ok(parse(value)?.unwrap_or(fallback))
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub month_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<CellStyle>,
    pub month: MonthGrid,
    pub years: YearListView,
}

/// ## Summary
/// Renders the month grid and the year list for `inputs`.
///
/// ## Errors
/// Returns `CoreError::InvalidDate` if the month or a listed year cannot be
/// represented.
pub fn render(settings: &Settings, inputs: &CalendarInputs, theme: &Theme) -> AppResult<Rendered> {
    let calendar = &settings.calendar;
    let rows = WeekRow::for_month(inputs.month.year(), inputs.month.month(), calendar.week_start)?;
    let policy = DayPolicy::new(&inputs.constraints, calendar.selection_mode, calendar.week_start);
    let month = build_month_grid(&MonthGridInput {
        month_date: inputs.month,
        rows: &rows,
        selection: Some(&inputs.selection),
        today: inputs.today,
        policy: &policy,
        row_height: settings.layout.day_row_height,
    })?;

    let list = YearList::new(YearListProps {
        years: year_range(settings.render.min_year, settings.render.max_year),
        selection: inputs.selection,
        constraints: inputs.constraints.clone(),
        bounds: inputs.bounds,
        today: inputs.today,
        mode: calendar.selection_mode,
        week_start: calendar.week_start,
        show_months: calendar.show_months,
        layout: YearLayout::from(&settings.layout),
    })?;
    let years = list.render(&ChronoFormatter, theme);

    tracing::info!(
        month = %inputs.month.month_key(),
        selection = ?inputs.selection,
        years = list.entries().len(),
        visible = ?years.layout.visible,
        "Rendered calendar"
    );

    Ok(Rendered {
        month_label: month.label_text(&ChronoFormatter),
        overlay: calendar.show_overlay.then(|| theme.overlay_style()),
        month,
        years,
    })
}

/// ## Summary
/// Writes `rendered` in the configured output format.
///
/// ## Errors
/// Returns an error if JSON serialization or text formatting fails.
pub fn write_output(rendered: &Rendered, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rendered)?),
        OutputFormat::Text => to_text(rendered),
    }
}

/// ## Summary
/// Plain-text rendering: the month grid, then the visible year rows.
///
/// Day markers: `*` selected, `!` today, `x` disabled.
///
/// ## Errors
/// Returns an error if writing to the buffer fails.
pub fn to_text(rendered: &Rendered) -> AppResult<String> {
    let mut out = String::new();
    writeln!(out, "{}", rendered.month_label)?;

    let grid = &rendered.month;
    for (index, row) in grid.rows.iter().enumerate() {
        // Only the first row is padded; trailing rows start on the week start
        if index == 0 {
            let pad = DAYS_PER_WEEK.saturating_sub(row.cells.len());
            out.push_str(&"    ".repeat(pad));
        }
        for cell in &row.cells {
            write!(out, "{:>3}{}", cell.day_of_month, day_marker(cell))?;
        }
        if row.is_edge {
            out.push_str("  <");
        }
        out.push('\n');
    }

    let layout = &rendered.years.layout;
    writeln!(
        out,
        "\nyears {}..{} offset {}{}",
        layout.visible.start,
        layout.visible.end,
        layout.scroll_offset,
        if layout.is_year_less { " (fits)" } else { "" }
    )?;
    for row in &rendered.years.rows {
        let marker = if row.is_active { ">" } else { " " };
        write!(out, "{marker}{}", row.year)?;
        for month in &row.months {
            let flag = if month.is_selected {
                "*"
            } else if month.is_disabled {
                "x"
            } else {
                " "
            };
            write!(out, " {}{flag}", month.label)?;
        }
        out.push('\n');
    }
    Ok(out)
}

const fn day_marker(cell: &DayCell) -> char {
    if cell.is_selected {
        '*'
    } else if cell.is_today {
        '!'
    } else if cell.is_disabled {
        'x'
    } else {
        ' '
    }
}
