//! Theme colours resolved into per-cell styles.

use infical_core::config::ThemeConfig;
use infical_core::constants::{DEFAULT_OVERLAY_COLOR, DEFAULT_SELECTION_COLOR, DEFAULT_TODAY_COLOR};
use serde::Serialize;

use crate::date::DateKey;

/// A colour that is either fixed or computed from the date it paints.
#[derive(Debug, Clone)]
pub enum ColorSource {
    Fixed(String),
    ByDate(fn(DateKey) -> String),
}

impl ColorSource {
    #[must_use]
    pub fn resolve(&self, date: DateKey) -> String {
        match self {
            Self::Fixed(color) => color.clone(),
            Self::ByDate(compute) => compute(date),
        }
    }
}

#[expect(clippy::struct_field_names, reason = "fields mirror the theme keys")]
#[derive(Debug, Clone)]
pub struct Theme {
    pub selection_color: ColorSource,
    pub today_color: String,
    pub overlay_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selection_color: ColorSource::Fixed(DEFAULT_SELECTION_COLOR.to_string()),
            today_color: DEFAULT_TODAY_COLOR.to_string(),
            overlay_color: DEFAULT_OVERLAY_COLOR.to_string(),
        }
    }
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            selection_color: ColorSource::Fixed(config.selection_color.clone()),
            today_color: config.today_color.clone(),
            overlay_color: config.overlay_color.clone(),
        }
    }
}

/// Inline style attached to a rendered cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl Theme {
    /// ## Summary
    /// Style of a month cell in the year view: selection background and a
    /// today-coloured border on the current month.
    #[must_use]
    pub fn month_cell_style(&self, date: DateKey, is_selected: bool, is_current_month: bool) -> CellStyle {
        CellStyle {
            color: None,
            background_color: is_selected.then(|| self.selection_color.resolve(date)),
            border_color: is_current_month.then(|| self.today_color.clone()),
        }
    }

    /// ## Summary
    /// Text colour of a year row, the selection colour of its January 1st.
    #[must_use]
    pub fn year_style(&self, year: i32) -> CellStyle {
        CellStyle {
            color: DateKey::new(year, 1, 1)
                .ok()
                .map(|date| self.selection_color.resolve(date)),
            ..CellStyle::default()
        }
    }

    #[must_use]
    pub fn overlay_style(&self) -> CellStyle {
        CellStyle {
            background_color: Some(self.overlay_color.clone()),
            ..CellStyle::default()
        }
    }
}
