//! BRISC - Nodule texture characterization for Rust
//!
//! Computes gray-level co-occurrence (Haralick) texture features of a
//! segmented lung nodule and stores them on the nodule.
//!
//! # Example
//!
//! ```
//! use brisc::texture::{FeatureExtractor, GlobalCoOccurrence};
//! use brisc::{Nodule, PixelGrid, NO_VALUE};
//!
//! let grid = PixelGrid::from_rows(&[
//!     [NO_VALUE, 8, 9, NO_VALUE],
//!     [7, 8, 9, 9],
//!     [7, 7, 8, 9],
//!     [NO_VALUE, 7, 8, NO_VALUE],
//! ])
//! .unwrap();
//! let mut nodule = Nodule::new("LIDC-0001", grid);
//!
//! GlobalCoOccurrence::new().extract_features(&mut nodule).unwrap();
//! assert_eq!(nodule.haralick().len(), 11);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use brisc_core::*;

// Re-export feature families as modules to avoid name conflicts
pub use brisc_texture as texture;
