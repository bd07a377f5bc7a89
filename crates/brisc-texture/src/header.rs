//! Gray-level header extraction
//!
//! The header is the ascending list of distinct gray levels in a grid. It
//! defines the index space `0..K` of every co-occurrence matrix built from
//! that grid.
//!
//! The sentinel is not filtered out explicitly. The sorted values are
//! walked with a cursor that starts at the sentinel, and a value is
//! accepted whenever it differs from the cursor. When the sentinel is the
//! smallest value present (the usual case, −2000) its whole run is
//! skipped. When some gray level is smaller than the sentinel the cursor
//! has already moved on by the time the sentinel run is reached, so the
//! sentinel itself becomes a header entry and sentinel pixels take part in
//! pair counting.

use brisc_core::PixelGrid;

/// Ordered distinct gray levels of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayLevelHeader {
    levels: Vec<i32>,
}

impl GrayLevelHeader {
    /// Extract the header of a grid
    ///
    /// # Examples
    ///
    /// ```
    /// use brisc_core::{PixelGrid, NO_VALUE};
    /// use brisc_texture::GrayLevelHeader;
    ///
    /// let grid = PixelGrid::from_rows(&[[5, 3, NO_VALUE], [5, 1, 3]]).unwrap();
    /// let header = GrayLevelHeader::from_grid(&grid, NO_VALUE);
    /// assert_eq!(header.levels(), &[1, 3, 5]);
    /// ```
    pub fn from_grid(grid: &PixelGrid, no_value: i32) -> Self {
        Self::from_values(grid.data(), no_value)
    }

    /// Extract the header of an arbitrary list of gray levels
    pub fn from_values(values: &[i32], no_value: i32) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let mut levels = Vec::new();
        let mut cursor = no_value;
        for value in sorted {
            if value != cursor {
                cursor = value;
                levels.push(value);
            }
        }

        GrayLevelHeader { levels }
    }

    /// Number of gray levels (the matrix size K)
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the header is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the gray levels in ascending order
    #[inline]
    pub fn levels(&self) -> &[i32] {
        &self.levels
    }

    /// Get the gray level at a header position
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.levels.get(index).copied()
    }

    /// Find the header position of a gray level
    ///
    /// Returns `None` for values not in the header, which is how sentinel
    /// pixels drop out of pair counting. The header is strictly ascending,
    /// so the search is a binary search.
    #[inline]
    pub fn position(&self, level: i32) -> Option<usize> {
        self.levels.binary_search(&level).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brisc_core::NO_VALUE;

    #[test]
    fn test_sorted_distinct() {
        let header = GrayLevelHeader::from_values(&[5, 3, 5, 1, 3], NO_VALUE);
        assert_eq!(header.levels(), &[1, 3, 5]);
        assert_eq!(header.position(3), Some(1));
        assert_eq!(header.position(4), None);
        assert_eq!(header.position(NO_VALUE), None);
    }

    #[test]
    fn test_sentinel_run_skipped() {
        let header = GrayLevelHeader::from_values(&[NO_VALUE, 7, NO_VALUE, -5, 7], NO_VALUE);
        assert_eq!(header.levels(), &[-5, 7]);
    }

    #[test]
    fn test_all_sentinel_is_empty() {
        let header = GrayLevelHeader::from_values(&[NO_VALUE; 9], NO_VALUE);
        assert!(header.is_empty());
        assert_eq!(header.get(0), None);
    }

    #[test]
    fn test_sentinel_kept_when_not_minimum() {
        // -3000 sorts before the sentinel, moving the cursor off it
        let header = GrayLevelHeader::from_values(&[4, NO_VALUE, -3000, NO_VALUE], NO_VALUE);
        assert_eq!(header.levels(), &[-3000, NO_VALUE, 4]);
        assert_eq!(header.position(NO_VALUE), Some(1));
    }

    #[test]
    fn test_zero_sentinel() {
        let header = GrayLevelHeader::from_values(&[0, 2, 0, 1], 0);
        assert_eq!(header.levels(), &[1, 2]);
    }
}
