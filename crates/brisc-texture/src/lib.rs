//! brisc-texture - Co-occurrence texture features for BRISC
//!
//! This crate computes the gray-level co-occurrence (Haralick) feature set
//! of a segmented nodule:
//!
//! - **Header extraction** - Ascending distinct gray levels of a grid
//! - **Co-occurrence matrices** - Normalized joint probabilities for four
//!   directions at each distance
//! - **Haralick features** - Eleven statistics per matrix
//! - **Aggregation** - Average over directions, minimum over distances
//!
//! # Examples
//!
//! ```
//! use brisc_core::{Nodule, PixelGrid, NO_VALUE};
//! use brisc_texture::{FeatureExtractor, GlobalCoOccurrence};
//!
//! let grid = PixelGrid::from_rows(&[
//!     [NO_VALUE, 3, 3, NO_VALUE],
//!     [2, 3, 4, 4],
//!     [2, 2, 4, NO_VALUE],
//! ])
//! .unwrap();
//! let mut nodule = Nodule::new("LIDC-0042", grid);
//!
//! GlobalCoOccurrence::new().extract_features(&mut nodule).unwrap();
//! let contrast = nodule.haralick().get("contrast").unwrap();
//! assert!(contrast >= 0.0);
//! ```
//!
//! Degenerate input is not an error: a (distance, direction) with no valid
//! pixel pair produces NaN features, which flow through the aggregation.

pub mod aggregate;
pub mod cooccurrence;
pub mod error;
pub mod extractor;
pub mod haralick;
pub mod header;

// Re-export core types
pub use brisc_core;

// Re-export error types
pub use error::{TextureError, TextureResult};

pub use header::GrayLevelHeader;

pub use cooccurrence::{
    CoOccurrenceMatrix, CoOccurrenceSet, Direction, NUM_DIRECTIONS, build_cooccurrence,
    perform_cooccurrence,
};

pub use haralick::{FEATURE_NAMES, FeatureVector, HaralickFeature, NUM_FEATURES, compute_haralick};

pub use aggregate::{average_over_directions, minimum_over_distances, write_features};

pub use extractor::{
    CoOccurrenceOptions, FeatureExtractor, GlobalCoOccurrence, NUM_DISTANCES, TextureAnalysis,
};
