//! ## Summary
//! Row geometry of the year list.
//!
//! Every row has the same height except the first and last, which carry an
//! extra spacing margin. Positions and hit-testing are closed-form, so the
//! list never measures rows it does not show.

/// Pixel position for a row index, saturating on absurd lengths.
fn index_px(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHeights {
    count: usize,
    row_height: u32,
    spacing: u32,
}

impl RowHeights {
    #[must_use]
    pub const fn new(count: usize, row_height: u32, spacing: u32) -> Self {
        Self {
            count,
            row_height,
            spacing,
        }
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn row_height(&self) -> u32 {
        self.row_height
    }

    /// ## Summary
    /// Height of row `index`, including the edge spacing on the first and last rows.
    #[must_use]
    pub fn height_of(&self, index: usize) -> u32 {
        if index == 0 || index + 1 == self.count {
            self.row_height + self.spacing
        } else {
            self.row_height
        }
    }

    /// ## Summary
    /// Sum of the heights of rows `0..index`; `offset_of(count)` is the total.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> i64 {
        let index = index.min(self.count);
        let spacing = i64::from(self.spacing);
        let mut offset = index_px(index).saturating_mul(i64::from(self.row_height));
        if index > 0 {
            offset += spacing;
        }
        if index == self.count && self.count > 1 {
            offset += spacing;
        }
        offset
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.offset_of(self.count)
    }

    /// ## Summary
    /// Index of the row covering `offset`, clamped to the list.
    #[must_use]
    pub fn index_at(&self, offset: i64) -> usize {
        if self.count == 0 || self.row_height == 0 {
            return 0;
        }
        let last = self.count - 1;
        let first_height = i64::from(self.height_of(0));
        if offset < first_height {
            return 0;
        }
        let index = (offset - i64::from(self.spacing)) / i64::from(self.row_height);
        usize::try_from(index).map_or(last, |index| index.min(last))
    }
}
