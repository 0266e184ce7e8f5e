//! Virtualized year/month list.
//!
//! Converts the selected year into an initial scroll offset and a visible
//! window without walking the whole year range.

pub mod heights;
pub mod layout;
pub mod list;

pub use heights::RowHeights;
pub use layout::{YearLayout, YearListLayout};
pub use list::{MonthCell, YearEntry, YearList, YearListProps, YearListView, YearRow};
