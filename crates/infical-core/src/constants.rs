/// Layout defaults shared across crates
pub const DEFAULT_DAY_ROW_HEIGHT: u32 = 56;
pub const DEFAULT_YEAR_ROW_HEIGHT: u32 = 40;
pub const DEFAULT_YEAR_WITH_MONTHS_ROW_HEIGHT: u32 = 80;
/// Extra height carried by the first and last rows of the year list.
pub const DEFAULT_YEAR_SPACING: u32 = 0;
/// Height of the header band above the scroll list.
pub const DEFAULT_HEADER_OFFSET: u32 = 40;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 500;
pub const DEFAULT_OVERSCAN: usize = 3;

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: usize = 12;

/// Format patterns handed to the date formatter (`chrono` strftime syntax)
pub const MONTH_PATTERN: &str = "%B";
pub const MONTH_YEAR_PATTERN: &str = const_str::concat!(MONTH_PATTERN, " %Y");
pub const MONTH_SHORT_PATTERN: &str = "%b";
pub const DAY_TITLE_PATTERN: &str = const_str::concat!(MONTH_PATTERN, " %-d, %Y");
pub const DATE_KEY_PATTERN: &str = "%Y-%m-%d";
pub const MONTH_KEY_PATTERN: &str = "%Y-%m";

/// Theme defaults
pub const DEFAULT_SELECTION_COLOR: &str = "#559FFF";
pub const DEFAULT_TODAY_COLOR: &str = "#FFA726";
pub const DEFAULT_OVERLAY_COLOR: &str = "#448AFF";
