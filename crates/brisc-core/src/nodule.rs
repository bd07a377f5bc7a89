//! Nodule - Host entity for per-region feature extraction
//!
//! A `Nodule` owns the segmented pixel data of one region and the maps
//! that feature extractors write into. Extractors read the grid and only
//! write into their own feature map.

use crate::feature_set::FeatureSet;
use crate::grid::PixelGrid;

/// A segmented lung nodule
#[derive(Debug, Clone)]
pub struct Nodule {
    /// Identifier assigned by the host
    id: String,
    /// Quantized pixel data, pixels outside the segmentation set to the sentinel
    segmented_pixel_data: PixelGrid,
    /// Co-occurrence (Haralick) texture features
    haralick: FeatureSet,
}

impl Nodule {
    /// Create a nodule with empty feature maps
    pub fn new(id: impl Into<String>, segmented_pixel_data: PixelGrid) -> Self {
        Nodule {
            id: id.into(),
            segmented_pixel_data,
            haralick: FeatureSet::new(),
        }
    }

    /// Get the nodule identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the segmented pixel data
    pub fn segmented_pixel_data(&self) -> &PixelGrid {
        &self.segmented_pixel_data
    }

    /// Replace the segmented pixel data
    ///
    /// Previously extracted features are left in place; rerun the
    /// extractors to refresh them.
    pub fn set_segmented_pixel_data(&mut self, grid: PixelGrid) {
        self.segmented_pixel_data = grid;
    }

    /// Get the Haralick feature map
    pub fn haralick(&self) -> &FeatureSet {
        &self.haralick
    }

    /// Get mutable access to the Haralick feature map
    pub fn haralick_mut(&mut self) -> &mut FeatureSet {
        &mut self.haralick
    }

    /// Split borrow: the pixel data together with the writable Haralick map
    pub fn haralick_target(&mut self) -> (&PixelGrid, &mut FeatureSet) {
        (&self.segmented_pixel_data, &mut self.haralick)
    }
}
