//! PixelGrid - Quantized intensity grid of a segmented region
//!
//! `PixelGrid` is a 2D array of `i32` gray levels. One designated value
//! (by convention [`NO_VALUE`]) marks pixels outside the segmented region.
//! The grid carries no notion of which value is the sentinel; callers pass
//! it alongside the grid to the texture operations.
//!
//! See [`serial`] for the text serialization format.
//!
//! # Examples
//!
//! ```
//! use brisc_core::{PixelGrid, NO_VALUE};
//!
//! let mut grid = PixelGrid::new_with_value(4, 3, NO_VALUE).unwrap();
//! grid.set_pixel(1, 2, 17).unwrap();
//! assert_eq!(grid.get_pixel(1, 2).unwrap(), 17);
//! assert_eq!(grid.get_pixel(0, 0).unwrap(), NO_VALUE);
//! ```

pub mod serial;

use crate::error::{Error, Result};

/// Gray level marking a pixel outside the segmented region
pub const NO_VALUE: i32 = -2000;

/// Integer gray-level grid
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y),
/// that is column `x` of row `y`, is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width in pixels (number of columns)
    width: u32,
    /// Height in pixels (number of rows)
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<i32>,
}

impl PixelGrid {
    /// Create a new grid with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0)
    }

    /// Create a new grid with all pixels set to the specified value
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `value` - Initial value for all pixels
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: i32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(PixelGrid {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a grid from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    /// Create a grid from a slice of rows
    ///
    /// Every row must have the same, non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use brisc_core::PixelGrid;
    ///
    /// let grid = PixelGrid::from_rows(&[vec![0, 1], vec![2, 3]]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 2));
    /// assert_eq!(grid.get_pixel(1, 0).unwrap(), 1);
    /// ```
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(PixelGrid {
            width,
            height,
            data,
        })
    }

    /// Get the grid width (number of columns)
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height (number of rows)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<i32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: i32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }

        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
        Ok(())
    }

    /// Get the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> i32 {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx]
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get a row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[i32] {
        let start = (y as usize) * (self.width as usize);
        let end = start + (self.width as usize);
        &self.data[start..end]
    }

    /// Iterate over the rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Count pixels that differ from `no_value`
    pub fn count_valid(&self, no_value: i32) -> usize {
        self.data.iter().filter(|&&v| v != no_value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            PixelGrid::new(0, 4),
            Err(Error::InvalidDimension {
                width: 0,
                height: 4
            })
        ));
        assert!(PixelGrid::new(4, 0).is_err());
    }

    #[test]
    fn test_from_data_length_mismatch() {
        assert!(PixelGrid::from_data(3, 2, vec![1, 2, 3, 4, 5]).is_err());
        let grid = PixelGrid::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get_pixel(2, 1).unwrap(), 6);
    }

    #[test]
    fn test_from_rows_ragged() {
        let ragged = PixelGrid::from_rows(&[vec![1, 2], vec![3]]);
        assert!(matches!(ragged, Err(Error::InvalidParameter(_))));
        let empty: [Vec<i32>; 0] = [];
        assert!(PixelGrid::from_rows(&empty).is_err());
    }

    #[test]
    fn test_row_major_access() {
        let grid = PixelGrid::from_rows(&[[0, 0, 1, 1], [2, 2, 3, 3]]).unwrap();
        assert_eq!(grid.row(1), &[2, 2, 3, 3]);
        assert_eq!(grid.get_pixel_unchecked(2, 0), 1);
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.get_pixel(4, 0).is_err());
    }

    #[test]
    fn test_count_valid() {
        let mut grid = PixelGrid::new_with_value(3, 3, NO_VALUE).unwrap();
        assert_eq!(grid.count_valid(NO_VALUE), 0);
        grid.set_pixel(1, 1, 5).unwrap();
        assert_eq!(grid.count_valid(NO_VALUE), 1);
    }
}
