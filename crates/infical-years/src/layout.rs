//! Scroll offset and visible window of the year list.

use std::ops::Range;

use infical_core::config::LayoutConfig;
use serde::Serialize;

use crate::heights::RowHeights;

/// Geometry inputs of the year list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearLayout {
    pub year_row_height: u32,
    pub year_with_months_row_height: u32,
    pub spacing: u32,
    pub header_offset: u32,
    pub viewport_height: u32,
    pub overscan: usize,
}

impl YearLayout {
    #[must_use]
    pub const fn row_height(&self, show_months: bool) -> u32 {
        if show_months {
            self.year_with_months_row_height
        } else {
            self.year_row_height
        }
    }
}

impl From<&LayoutConfig> for YearLayout {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            year_row_height: config.year_row_height,
            year_with_months_row_height: config.year_with_months_row_height,
            spacing: config.spacing,
            header_offset: config.header_offset,
            viewport_height: config.viewport_height,
            overscan: config.overscan,
        }
    }
}

/// Computed layout of one year list instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearListLayout {
    /// The whole list fits the viewport and is shown unscrolled.
    pub is_year_less: bool,
    pub total_height: i64,
    pub container_height: i64,
    /// Initial offset centring the selected year; the windowing layer clamps it.
    pub scroll_offset: i64,
    pub visible: Range<usize>,
}

/// ## Summary
/// Computes the layout for a list with `selected_index` captured at mount.
///
/// When the list fits the viewport no offset is computed. Otherwise the
/// offset is `offset_of(selected) - viewport / 2 + header_offset`.
#[must_use]
pub fn compute_layout(
    heights: &RowHeights,
    layout: &YearLayout,
    selected_index: Option<usize>,
) -> YearListLayout {
    let total_height = heights.total();
    let viewport = i64::from(layout.viewport_height);
    let is_year_less = total_height <= viewport;

    if is_year_less {
        return YearListLayout {
            is_year_less,
            total_height,
            container_height: total_height,
            scroll_offset: 0,
            visible: 0..heights.count(),
        };
    }

    let scroll_offset = selected_index.map_or(0, |index| {
        heights.offset_of(index) - viewport / 2 + i64::from(layout.header_offset)
    });
    let visible = visible_window(heights, scroll_offset, viewport, layout.overscan);
    tracing::trace!(
        total_height,
        scroll_offset,
        start = visible.start,
        end = visible.end,
        "Computed year list layout"
    );

    YearListLayout {
        is_year_less,
        total_height,
        container_height: viewport,
        scroll_offset,
        visible,
    }
}

/// ## Summary
/// Rows intersecting `[offset, offset + container_height)` plus `overscan`
/// rows on each side. The offset is clamped to the scrollable range first.
#[must_use]
pub fn visible_window(
    heights: &RowHeights,
    offset: i64,
    container_height: i64,
    overscan: usize,
) -> Range<usize> {
    let count = heights.count();
    if count == 0 || container_height <= 0 {
        return 0..0;
    }
    let max_offset = (heights.total() - container_height).max(0);
    let offset = offset.clamp(0, max_offset);

    let first = heights.index_at(offset);
    let last = heights.index_at(offset + container_height - 1);
    first.saturating_sub(overscan)..last.saturating_add(1).saturating_add(overscan).min(count)
}
