//! Gray-level co-occurrence matrices
//!
//! A co-occurrence matrix estimates the joint probability that the gray
//! level at header position `i` appears at a pixel while the gray level at
//! header position `j` appears at a fixed offset from it.
//!
//! ```text
//!  4   3   2
//!   \  |  /
//!    \ | /
//!      X ----- 1
//! ```
//!
//! Offsets point right, up-right, up and up-left. Rows grow downwards, so
//! "up" is a negative row step.

use crate::error::{TextureError, TextureResult};
use crate::header::GrayLevelHeader;
use brisc_core::PixelGrid;
use log::debug;

/// Number of neighbor directions
pub const NUM_DIRECTIONS: usize = 4;

/// Neighbor direction of a co-occurrence pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 0°: `(row, col + d)`
    Horizontal = 1,
    /// 45°: `(row - d, col + d)`
    UpRight = 2,
    /// 90°: `(row - d, col)`
    Vertical = 3,
    /// 135°: `(row - d, col - d)`
    UpLeft = 4,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::Horizontal,
        Direction::UpRight,
        Direction::Vertical,
        Direction::UpLeft,
    ];

    /// Convert a 1-based direction index
    pub fn from_index(index: u32) -> TextureResult<Self> {
        match index {
            1 => Ok(Direction::Horizontal),
            2 => Ok(Direction::UpRight),
            3 => Ok(Direction::Vertical),
            4 => Ok(Direction::UpLeft),
            _ => Err(TextureError::InvalidDirection(index)),
        }
    }

    /// Get the 1-based direction index
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Get the `(row, col)` offset of the paired pixel
    pub fn offset(self, distance: u32) -> (i64, i64) {
        let d = distance as i64;
        match self {
            Direction::Horizontal => (0, d),
            Direction::UpRight => (-d, d),
            Direction::Vertical => (-d, 0),
            Direction::UpLeft => (-d, -d),
        }
    }

    /// Scan bounds for which both pixels of a pair lie inside the grid
    fn scan_plan(self, distance: u32, width: u32, height: u32) -> ScanPlan {
        let d = distance as i64;
        let (width, height) = (width as i64, height as i64);
        let (row_step, col_step) = self.offset(distance);
        let (row_begin, col_begin, col_end) = match self {
            Direction::Horizontal => (0, 0, width - d),
            Direction::UpRight => (d, 0, width - d),
            Direction::Vertical => (d, 0, width),
            Direction::UpLeft => (d, d, width),
        };
        ScanPlan {
            rows: row_begin..height,
            cols: col_begin..col_end,
            row_step,
            col_step,
        }
    }
}

/// Pixel range to scan for one (direction, distance)
struct ScanPlan {
    rows: std::ops::Range<i64>,
    cols: std::ops::Range<i64>,
    row_step: i64,
    col_step: i64,
}

/// Normalized `K x K` co-occurrence matrix
///
/// Cells sum to 1 when at least one pair was counted. With no valid pairs
/// every cell is `0 / 0`, i.e. NaN, and stays that way.
#[derive(Debug, Clone, PartialEq)]
pub struct CoOccurrenceMatrix {
    /// Matrix size K (header length)
    size: usize,
    /// Cell values, row-major
    data: Vec<f64>,
    /// Number of pixel pairs counted before normalization
    pair_count: usize,
}

impl CoOccurrenceMatrix {
    /// Create a normalized matrix from raw row-major pair counts
    ///
    /// The pair count is the sum of `counts`; an all-zero table gives NaN cells.
    ///
    /// # Errors
    ///
    /// Returns `TextureError::InvalidParameters` if `counts` is not `size * size` long.
    pub fn from_counts(size: usize, counts: Vec<u32>) -> TextureResult<Self> {
        if counts.len() != size * size {
            return Err(TextureError::InvalidParameters(format!(
                "count length {} doesn't match {}x{}",
                counts.len(),
                size,
                size
            )));
        }
        let pair_count = counts.iter().map(|&c| c as usize).sum();
        let mut matrix = CoOccurrenceMatrix {
            size,
            data: counts.into_iter().map(f64::from).collect(),
            pair_count,
        };
        matrix.normalize();
        Ok(matrix)
    }

    /// Matrix size K
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no cells (empty header)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of pixel pairs counted
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Get the cell at row `i`, column `j`, or `None` if outside the matrix
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        Some(self.data[i * self.size + j])
    }

    /// Get the cell at row `i`, column `j` without returning an `Option`
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not less than the matrix size.
    #[inline]
    pub fn get_unchecked(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.size && j < self.size,
            "cell ({}, {}) outside {}x{}",
            i,
            j,
            self.size,
            self.size
        );
        self.data[i * self.size + j]
    }

    /// Get raw access to the cells (row-major)
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over `(i, j, p)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &p)| (idx / size, idx % size, p))
    }

    /// Sum of all cells
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    fn normalize(&mut self) {
        let total = self.pair_count as f64;
        for cell in &mut self.data {
            *cell /= total;
        }
    }
}

/// Build the co-occurrence matrix of a grid for one direction and distance
///
/// Pairs whose gray levels are not both in `header` (sentinel pixels) are
/// skipped. A zero pair count is not an error: the result is an all-NaN
/// matrix.
///
/// # Errors
///
/// Returns `TextureError::InvalidDistance` if `distance` is 0.
pub fn build_cooccurrence(
    grid: &PixelGrid,
    header: &GrayLevelHeader,
    direction: Direction,
    distance: u32,
) -> TextureResult<CoOccurrenceMatrix> {
    if distance == 0 {
        return Err(TextureError::InvalidDistance(distance));
    }

    let size = header.len();
    let mut data = vec![0.0f64; size * size];
    let mut pair_count = 0usize;

    let plan = direction.scan_plan(distance, grid.width(), grid.height());
    for r in plan.rows.clone() {
        for c in plan.cols.clone() {
            let i_level = grid.get_pixel_unchecked(c as u32, r as u32);
            let j_level =
                grid.get_pixel_unchecked((c + plan.col_step) as u32, (r + plan.row_step) as u32);
            if let (Some(i), Some(j)) = (header.position(i_level), header.position(j_level)) {
                data[i * size + j] += 1.0;
                pair_count += 1;
            }
        }
    }

    if pair_count == 0 {
        debug!(
            "co-occurrence d={} {:?}: no valid pixel pairs, matrix is degenerate",
            distance, direction
        );
    } else {
        debug!(
            "co-occurrence d={} {:?}: {} valid pixel pairs over {} levels",
            distance, direction, pair_count, size
        );
    }

    let mut matrix = CoOccurrenceMatrix {
        size,
        data,
        pair_count,
    };
    matrix.normalize();
    Ok(matrix)
}

/// Co-occurrence matrices of one grid for every distance and direction
#[derive(Debug, Clone)]
pub struct CoOccurrenceSet {
    /// Row header (gray level of the reference pixel)
    i_header: GrayLevelHeader,
    /// Column header (gray level of the offset pixel)
    j_header: GrayLevelHeader,
    /// `matrices[distance - 1][direction - 1]`
    matrices: Vec<[CoOccurrenceMatrix; NUM_DIRECTIONS]>,
}

impl CoOccurrenceSet {
    /// Row header
    pub fn i_header(&self) -> &GrayLevelHeader {
        &self.i_header
    }

    /// Column header
    pub fn j_header(&self) -> &GrayLevelHeader {
        &self.j_header
    }

    /// Number of distances
    pub fn num_distances(&self) -> usize {
        self.matrices.len()
    }

    /// Get the four direction matrices at a 1-based distance
    pub fn get_distance(&self, distance: u32) -> Option<&[CoOccurrenceMatrix; NUM_DIRECTIONS]> {
        let idx = (distance as usize).checked_sub(1)?;
        self.matrices.get(idx)
    }

    /// Get the matrix at a 1-based distance and direction
    pub fn get(&self, distance: u32, direction: u32) -> Option<&CoOccurrenceMatrix> {
        let dir_idx = (direction as usize).checked_sub(1)?;
        self.get_distance(distance)?.get(dir_idx)
    }

    /// Iterate over `(distance, direction, matrix)` in distance-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, Direction, &CoOccurrenceMatrix)> + '_ {
        self.matrices.iter().enumerate().flat_map(|(d, row)| {
            Direction::ALL
                .iter()
                .zip(row.iter())
                .map(move |(&dir, m)| (d as u32 + 1, dir, m))
        })
    }
}

/// Build co-occurrence matrices for distances `1..=num_distances` and all
/// four directions
///
/// # Errors
///
/// Returns `TextureError::InvalidParameters` if `num_distances` is 0.
pub fn perform_cooccurrence(
    grid: &PixelGrid,
    no_value: i32,
    num_distances: u32,
) -> TextureResult<CoOccurrenceSet> {
    if num_distances == 0 {
        return Err(TextureError::InvalidParameters(
            "at least one distance is required".into(),
        ));
    }

    let header = GrayLevelHeader::from_grid(grid, no_value);
    debug!(
        "co-occurrence header: {} gray levels in {}x{} grid",
        header.len(),
        grid.width(),
        grid.height()
    );

    let mut matrices = Vec::with_capacity(num_distances as usize);
    for distance in 1..=num_distances {
        let [m1, m2, m3, m4] = Direction::ALL;
        matrices.push([
            build_cooccurrence(grid, &header, m1, distance)?,
            build_cooccurrence(grid, &header, m2, distance)?,
            build_cooccurrence(grid, &header, m3, distance)?,
            build_cooccurrence(grid, &header, m4, distance)?,
        ]);
    }

    Ok(CoOccurrenceSet {
        i_header: header.clone(),
        j_header: header,
        matrices,
    })
}
