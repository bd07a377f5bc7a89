//! Global co-occurrence feature extraction for a nodule
//!
//! Pipeline for one grid:
//!
//! 1. gray-level header
//! 2. one co-occurrence matrix per (distance, direction)
//! 3. Haralick features of every matrix
//! 4. average over directions, then minimum over distances
//!
//! The final eleven values are written into the nodule's Haralick map.

use crate::aggregate::{average_over_directions, minimum_over_distances, write_features};
use crate::cooccurrence::{CoOccurrenceSet, NUM_DIRECTIONS, perform_cooccurrence};
use crate::error::{TextureError, TextureResult};
use crate::haralick::{FeatureVector, compute_haralick};
use brisc_core::{NO_VALUE, Nodule, PixelGrid};
use log::debug;

/// Default number of pixel distances (1..=4)
pub const NUM_DISTANCES: u32 = 4;

/// Extractor of a feature family into a nodule's feature maps
pub trait FeatureExtractor {
    /// Compute features from the nodule's pixel data and store them on it
    fn extract_features(&self, nodule: &mut Nodule) -> TextureResult<()>;
}

/// Options for co-occurrence texture extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoOccurrenceOptions {
    /// Gray level marking pixels outside the segmentation
    pub no_value: i32,
    /// Distances `1..=num_distances` are evaluated
    pub num_distances: u32,
}

impl Default for CoOccurrenceOptions {
    fn default() -> Self {
        Self {
            no_value: NO_VALUE,
            num_distances: NUM_DISTANCES,
        }
    }
}

impl CoOccurrenceOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentinel gray level
    pub fn with_no_value(mut self, no_value: i32) -> Self {
        self.no_value = no_value;
        self
    }

    /// Set the number of distances
    pub fn with_num_distances(mut self, num_distances: u32) -> Self {
        self.num_distances = num_distances;
        self
    }
}

/// Intermediate and final results of one extraction
#[derive(Debug, Clone)]
pub struct TextureAnalysis {
    cooccurrence: CoOccurrenceSet,
    /// `raw[distance - 1][direction - 1]`
    raw: Vec<[FeatureVector; NUM_DIRECTIONS]>,
    /// `averaged[distance - 1]`
    averaged: Vec<FeatureVector>,
    features: FeatureVector,
}

impl TextureAnalysis {
    /// The co-occurrence matrices the features were computed from
    pub fn cooccurrence(&self) -> &CoOccurrenceSet {
        &self.cooccurrence
    }

    /// Raw features of the matrix at a 1-based distance and direction
    pub fn raw(&self, distance: u32, direction: u32) -> Option<&FeatureVector> {
        let d = (distance as usize).checked_sub(1)?;
        let dir = (direction as usize).checked_sub(1)?;
        self.raw.get(d)?.get(dir)
    }

    /// Raw features indexed `[distance - 1][direction - 1]`
    pub fn raw_table(&self) -> &[[FeatureVector; NUM_DIRECTIONS]] {
        &self.raw
    }

    /// Direction-averaged features indexed `[distance - 1]`
    pub fn averaged(&self) -> &[FeatureVector] {
        &self.averaged
    }

    /// Final per-nodule features
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }
}

/// Haralick features of the whole segmented region
///
/// # Examples
///
/// ```
/// use brisc_core::{Nodule, PixelGrid};
/// use brisc_texture::{FeatureExtractor, GlobalCoOccurrence, FEATURE_NAMES};
///
/// let grid = PixelGrid::from_rows(&[[0, 0, 1, 1], [0, 0, 1, 1], [2, 2, 3, 3], [2, 2, 3, 3]])
///     .unwrap();
/// let mut nodule = Nodule::new("n1", grid);
/// GlobalCoOccurrence::new().extract_features(&mut nodule).unwrap();
/// assert_eq!(nodule.haralick().len(), FEATURE_NAMES.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlobalCoOccurrence {
    options: CoOccurrenceOptions,
}

impl GlobalCoOccurrence {
    /// Create an extractor with default options (sentinel −2000, 4 distances)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options
    ///
    /// # Errors
    ///
    /// Returns `TextureError::InvalidParameters` if `num_distances` is 0.
    pub fn with_options(options: CoOccurrenceOptions) -> TextureResult<Self> {
        if options.num_distances == 0 {
            return Err(TextureError::InvalidParameters(
                "num_distances must be at least 1".into(),
            ));
        }
        Ok(Self { options })
    }

    /// Get the options
    pub fn options(&self) -> &CoOccurrenceOptions {
        &self.options
    }

    /// Run the full pipeline on a grid, keeping every intermediate table
    pub fn analyze(&self, grid: &PixelGrid) -> TextureResult<TextureAnalysis> {
        let cooccurrence =
            perform_cooccurrence(grid, self.options.no_value, self.options.num_distances)?;

        let mut raw = Vec::with_capacity(cooccurrence.num_distances());
        let mut averaged = Vec::with_capacity(cooccurrence.num_distances());
        for distance in 1..=self.options.num_distances {
            let matrices = cooccurrence.get_distance(distance).ok_or_else(|| {
                TextureError::InvalidParameters(format!("no matrices for distance {distance}"))
            })?;
            let per_direction = matrices.each_ref().map(compute_haralick);
            averaged.push(average_over_directions(&per_direction));
            raw.push(per_direction);
        }

        let features = minimum_over_distances(&averaged);
        Ok(TextureAnalysis {
            cooccurrence,
            raw,
            averaged,
            features,
        })
    }

    /// Compute only the final per-nodule features of a grid
    pub fn compute(&self, grid: &PixelGrid) -> TextureResult<FeatureVector> {
        Ok(*self.analyze(grid)?.features())
    }
}

impl FeatureExtractor for GlobalCoOccurrence {
    fn extract_features(&self, nodule: &mut Nodule) -> TextureResult<()> {
        let (grid, haralick) = nodule.haralick_target();
        let features = self.compute(grid)?;
        write_features(&features, haralick);

        debug!(
            "nodule {}: haralick features {:?}",
            nodule.id(),
            features.values()
        );
        if !features.is_finite() {
            debug!(
                "nodule {}: non-finite haralick features (region too small or empty)",
                nodule.id()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haralick::{FEATURE_NAMES, HaralickFeature};

    fn quadrants() -> PixelGrid {
        PixelGrid::from_rows(&[[0, 0, 1, 1], [0, 0, 1, 1], [2, 2, 3, 3], [2, 2, 3, 3]]).unwrap()
    }

    #[test]
    fn test_options_builder() {
        let opts = CoOccurrenceOptions::new()
            .with_no_value(-1)
            .with_num_distances(2);
        assert_eq!(opts.no_value, -1);
        assert_eq!(opts.num_distances, 2);
        assert_eq!(CoOccurrenceOptions::default().no_value, NO_VALUE);
        assert!(
            GlobalCoOccurrence::with_options(CoOccurrenceOptions::new().with_num_distances(0))
                .is_err()
        );
    }

    #[test]
    fn test_analysis_shape() {
        let analysis = GlobalCoOccurrence::new().analyze(&quadrants()).unwrap();
        assert_eq!(analysis.raw_table().len(), 4);
        assert_eq!(analysis.averaged().len(), 4);
        assert!(analysis.raw(1, 1).is_some());
        assert!(analysis.raw(0, 1).is_none());
        assert!(analysis.raw(1, 5).is_none());
        assert_eq!(analysis.cooccurrence().num_distances(), 4);
    }

    #[test]
    fn test_distance_four_degenerate_on_small_grid() {
        // A 4x4 grid has no pixel pairs at distance 4 in any direction
        let analysis = GlobalCoOccurrence::new().analyze(&quadrants()).unwrap();
        assert!(analysis.averaged()[3].values().iter().all(|v| v.is_nan()));
        assert!(analysis.features().is_finite());
    }

    #[test]
    fn test_extract_writes_all_names() {
        let mut nodule = Nodule::new("n1", quadrants());
        GlobalCoOccurrence::new()
            .extract_features(&mut nodule)
            .unwrap();
        for name in FEATURE_NAMES {
            assert!(nodule.haralick().contains(name), "missing {name}");
        }
        let energy = nodule.haralick().get(HaralickFeature::Energy.name()).unwrap();
        assert!(energy > 0.0 && energy <= 1.0);
    }

    #[test]
    fn test_custom_sentinel() {
        let grid = PixelGrid::from_rows(&[[-1, 4, 4], [-1, 4, 5]]).unwrap();
        let options = CoOccurrenceOptions::new()
            .with_no_value(-1)
            .with_num_distances(1);
        let extractor = GlobalCoOccurrence::with_options(options).unwrap();
        let analysis = extractor.analyze(&grid).unwrap();
        assert_eq!(analysis.cooccurrence().i_header().levels(), &[4, 5]);
        assert_eq!(analysis.averaged().len(), 1);
    }
}
