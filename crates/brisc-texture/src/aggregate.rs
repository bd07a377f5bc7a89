//! Aggregation of per-matrix features into per-nodule features
//!
//! Raw feature vectors are first averaged over the four directions at each
//! distance, then the minimum over distances is taken per feature. The
//! order matters: averaging then minimizing is not the same as minimizing
//! then averaging.

use crate::haralick::{FeatureVector, HaralickFeature, NUM_FEATURES};
use brisc_core::FeatureSet;

/// Average feature vectors element-wise
///
/// NaN and infinite values propagate into the average. An empty slice
/// averages to NaN.
pub fn average_over_directions(raw: &[FeatureVector]) -> FeatureVector {
    let mut sums = [0.0f64; NUM_FEATURES];
    for fv in raw {
        for (sum, value) in sums.iter_mut().zip(fv.values()) {
            *sum += value;
        }
    }
    let count = raw.len() as f64;
    for sum in &mut sums {
        *sum /= count;
    }
    FeatureVector::new(sums)
}

/// Take the element-wise minimum over feature vectors
///
/// NaN marks a minimum that is not yet set: a NaN entry is replaced by the
/// next value seen and never replaces a value already taken. The result is
/// NaN only if every entry is NaN.
pub fn minimum_over_distances(averaged: &[FeatureVector]) -> FeatureVector {
    let mut mins = [f64::NAN; NUM_FEATURES];
    for fv in averaged {
        for (min, &value) in mins.iter_mut().zip(fv.values()) {
            if min.is_nan() || value < *min {
                *min = value;
            }
        }
    }
    FeatureVector::new(mins)
}

/// Write features into a feature map under their fixed names
///
/// Existing entries are overwritten and missing ones inserted, so writing
/// the same vector twice leaves the map unchanged.
pub fn write_features(features: &FeatureVector, target: &mut FeatureSet) {
    for feature in HaralickFeature::ALL {
        target.set(feature.name(), features.get(feature));
    }
}
