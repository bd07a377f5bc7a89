//! BRISC Core - Basic data structures for nodule characterization
//!
//! This crate provides the data structures shared by the feature
//! extractors:
//!
//! - [`PixelGrid`] - Quantized gray-level grid of a segmented region
//! - [`FeatureSet`] - Named scalar feature map
//! - [`Nodule`] - Host entity owning a grid and its feature maps
//!
//! # Examples
//!
//! ```
//! use brisc_core::{Nodule, PixelGrid, NO_VALUE};
//!
//! let grid = PixelGrid::new_with_value(8, 8, NO_VALUE).unwrap();
//! let mut nodule = Nodule::new("LIDC-0001", grid);
//! nodule.haralick_mut().set("contrast", 0.25);
//! assert_eq!(nodule.haralick().get("contrast"), Some(0.25));
//! ```

pub mod error;
pub mod feature_set;
pub mod grid;
pub mod nodule;

pub use error::{Error, Result};
pub use feature_set::FeatureSet;
pub use grid::{NO_VALUE, PixelGrid};
pub use nodule::Nodule;
