//! Locale-aware date formatting is a host concern; this is the seam.

use std::fmt::Write as _;

use crate::date::DateKey;

/// ## Summary
/// Formats dates for labels and titles.
///
/// Patterns use `chrono` strftime syntax; a localized host can map them to its
/// own formatter.
pub trait DateFormatter {
    fn format(&self, date: DateKey, pattern: &str) -> String;
}

/// English formatter backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoFormatter;

impl DateFormatter for ChronoFormatter {
    fn format(&self, date: DateKey, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.as_naive().format(pattern)).is_err() {
            tracing::warn!(pattern, "Unsupported date pattern");
            out.clear();
        }
        out
    }
}
