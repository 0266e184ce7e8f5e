use anyhow::Result;
use chrono::Weekday;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_DAY_ROW_HEIGHT, DEFAULT_HEADER_OFFSET, DEFAULT_OVERLAY_COLOR, DEFAULT_OVERSCAN,
    DEFAULT_SELECTION_COLOR, DEFAULT_TODAY_COLOR, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_YEAR_ROW_HEIGHT,
    DEFAULT_YEAR_SPACING, DEFAULT_YEAR_WITH_MONTHS_ROW_HEIGHT,
};
use crate::error::{CoreError, CoreResult};
use crate::types::{OutputFormat, SelectionMode};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// First day of the week, e.g. `sunday` or `mon`.
    pub week_start: Weekday,
    pub selection_mode: SelectionMode,
    pub hide_on_select: bool,
    pub show_months: bool,
    pub show_overlay: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub day_row_height: u32,
    pub year_row_height: u32,
    pub year_with_months_row_height: u32,
    pub spacing: u32,
    pub header_offset: u32,
    pub viewport_height: u32,
    pub overscan: usize,
}

#[expect(clippy::struct_field_names, reason = "fields mirror the theme keys")]
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub selection_color: String,
    pub today_color: String,
    pub overlay_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Inputs for the demo renderer. Dates are `YYYY-MM-DD` strings and are
/// validated when the calendar is built, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub selected_end: Option<String>,
    #[serde(default)]
    pub min_date: Option<String>,
    #[serde(default)]
    pub max_date: Option<String>,
    #[serde(default)]
    pub disabled_dates: Vec<String>,
    #[serde(default)]
    pub disabled_weekdays: Vec<u8>,
    pub min_year: i32,
    pub max_year: i32,
    pub format: OutputFormat,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("calendar.week_start", "sunday")?
            .set_default("calendar.selection_mode", SelectionMode::Single.as_str())?
            .set_default("calendar.hide_on_select", true)?
            .set_default("calendar.show_months", true)?
            .set_default("calendar.show_overlay", false)?
            .set_default("layout.day_row_height", DEFAULT_DAY_ROW_HEIGHT)?
            .set_default("layout.year_row_height", DEFAULT_YEAR_ROW_HEIGHT)?
            .set_default(
                "layout.year_with_months_row_height",
                DEFAULT_YEAR_WITH_MONTHS_ROW_HEIGHT,
            )?
            .set_default("layout.spacing", DEFAULT_YEAR_SPACING)?
            .set_default("layout.header_offset", DEFAULT_HEADER_OFFSET)?
            .set_default("layout.viewport_height", DEFAULT_VIEWPORT_HEIGHT)?
            .set_default("layout.overscan", u64::try_from(DEFAULT_OVERSCAN)?)?
            .set_default("theme.selection_color", DEFAULT_SELECTION_COLOR)?
            .set_default("theme.today_color", DEFAULT_TODAY_COLOR)?
            .set_default("theme.overlay_color", DEFAULT_OVERLAY_COLOR)?
            .set_default("logging.level", "info")?
            .set_default("render.min_year", 1980)?
            .set_default("render.max_year", 2050)?
            .set_default("render.format", "text")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env, e.g. INFICAL_LAYOUT__VIEWPORT_HEIGHT=400
            .add_source(
                config::Environment::with_prefix("INFICAL")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the cross-field invariants that serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for zero row heights, an empty
    /// viewport, an inverted year range, an overscan larger than the year
    /// range, or a weekday index above 6.
    pub fn validate(&self) -> CoreResult<()> {
        let layout = &self.layout;
        if layout.day_row_height == 0
            || layout.year_row_height == 0
            || layout.year_with_months_row_height == 0
        {
            return Err(CoreError::InvalidConfiguration(
                "row heights must be positive".to_string(),
            ));
        }
        if layout.viewport_height == 0 {
            return Err(CoreError::InvalidConfiguration(
                "viewport_height must be positive".to_string(),
            ));
        }
        if self.render.min_year > self.render.max_year {
            return Err(CoreError::InvalidConfiguration(format!(
                "min_year {} is after max_year {}",
                self.render.min_year, self.render.max_year
            )));
        }
        let year_count = i64::from(self.render.max_year) - i64::from(self.render.min_year) + 1;
        if !i64::try_from(layout.overscan).is_ok_and(|overscan| overscan <= year_count) {
            return Err(CoreError::InvalidConfiguration(format!(
                "overscan {} exceeds the {year_count} listed years",
                layout.overscan
            )));
        }
        if let Some(day) = self.render.disabled_weekdays.iter().find(|day| **day > 6) {
            return Err(CoreError::InvalidConfiguration(format!(
                "disabled weekday {day} is outside 0..=6"
            )));
        }
        tracing::debug!(
            week_start = %self.calendar.week_start,
            mode = %self.calendar.selection_mode,
            "Configuration validated"
        );
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `config.toml`.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
