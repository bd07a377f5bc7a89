//! Haralick texture statistics of a co-occurrence matrix
//!
//! Eleven statistics are computed in three passes over a normalized
//! matrix `p`: the row/column means, the row/column variances, then every
//! feature at once. Indices are header positions, not gray levels.
//!
//! | feature | accumulated term | skipped when |
//! |---|---|---|
//! | contrast | `(i-j)² p` | |
//! | correlation | `(i-μi)(j-μj) p / sqrt(σi² σj²)` | either variance is 0 |
//! | energy | `p²` | |
//! | homogeneity | `p / (1 + abs(i-j))` | |
//! | entropy | `-p ln p` | `p == 0` |
//! | thirdOrderMoment | `p (i-j)³` | |
//! | inverseVariance | `p / (i-j)²` | `i == j` |
//! | sumAverage | `(i p + j p) / 2` | |
//! | variance | `(p (i-μi)² + p (j-μj)²) / 2` | |
//! | clusterTendency | `p (i-μi+j-μj)²` | |
//! | maximumProbability | running max of `p`, seeded from cell (0, 0) | |
//!
//! No other guards exist, so a NaN matrix (zero valid pairs) yields NaN
//! for every feature.

use crate::cooccurrence::CoOccurrenceMatrix;
use std::ops::Index;

/// Number of Haralick features
pub const NUM_FEATURES: usize = 11;

/// Feature names in output order
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "contrast",
    "correlation",
    "energy",
    "homogeneity",
    "entropy",
    "thirdOrderMoment",
    "inverseVariance",
    "sumAverage",
    "variance",
    "clusterTendency",
    "maximumProbability",
];

/// One Haralick statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaralickFeature {
    Contrast,
    Correlation,
    Energy,
    Homogeneity,
    Entropy,
    ThirdOrderMoment,
    InverseVariance,
    SumAverage,
    Variance,
    ClusterTendency,
    MaximumProbability,
}

impl HaralickFeature {
    /// All features in output order
    pub const ALL: [HaralickFeature; NUM_FEATURES] = [
        HaralickFeature::Contrast,
        HaralickFeature::Correlation,
        HaralickFeature::Energy,
        HaralickFeature::Homogeneity,
        HaralickFeature::Entropy,
        HaralickFeature::ThirdOrderMoment,
        HaralickFeature::InverseVariance,
        HaralickFeature::SumAverage,
        HaralickFeature::Variance,
        HaralickFeature::ClusterTendency,
        HaralickFeature::MaximumProbability,
    ];

    /// Position in the output order
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used as the feature-map key
    #[inline]
    pub fn name(self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// Look up a feature by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// The eleven Haralick statistics of one matrix, in output order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; NUM_FEATURES],
}

impl FeatureVector {
    /// Create a vector from values in output order
    pub fn new(values: [f64; NUM_FEATURES]) -> Self {
        FeatureVector { values }
    }

    /// Vector with every feature set to NaN
    pub fn nan() -> Self {
        FeatureVector {
            values: [f64::NAN; NUM_FEATURES],
        }
    }

    /// Get one feature
    #[inline]
    pub fn get(&self, feature: HaralickFeature) -> f64 {
        self.values[feature.index()]
    }

    /// Set one feature
    #[inline]
    pub fn set(&mut self, feature: HaralickFeature, value: f64) {
        self.values[feature.index()] = value;
    }

    /// Get the values in output order
    #[inline]
    pub fn values(&self) -> &[f64; NUM_FEATURES] {
        &self.values
    }

    /// Iterate over `(feature, value)` in output order
    pub fn iter(&self) -> impl Iterator<Item = (HaralickFeature, f64)> + '_ {
        HaralickFeature::ALL
            .into_iter()
            .zip(self.values.iter().copied())
    }

    /// Check whether every feature is finite
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl Index<HaralickFeature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: HaralickFeature) -> &f64 {
        &self.values[feature.index()]
    }
}

/// Compute the Haralick statistics of a normalized co-occurrence matrix
///
/// A matrix with no cells (empty header) has no distribution to describe
/// and yields NaN for every feature.
pub fn compute_haralick(matrix: &CoOccurrenceMatrix) -> FeatureVector {
    if matrix.is_empty() {
        return FeatureVector::nan();
    }

    let mut imean = 0.0;
    let mut jmean = 0.0;
    for (i, j, p) in matrix.iter() {
        imean += i as f64 * p;
        jmean += j as f64 * p;
    }

    let mut ivar = 0.0;
    let mut jvar = 0.0;
    for (i, j, p) in matrix.iter() {
        ivar += (i as f64 - imean).powi(2) * p;
        jvar += (j as f64 - jmean).powi(2) * p;
    }

    let mut contrast = 0.0;
    let mut correlation = 0.0;
    let mut energy = 0.0;
    let mut homogeneity = 0.0;
    let mut entropy = 0.0;
    let mut third_order_moment = 0.0;
    let mut inverse_variance = 0.0;
    let mut sum_average = 0.0;
    let mut variance = 0.0;
    let mut cluster_tendency = 0.0;
    let mut maximum_probability = 0.0;

    for (i, j, p) in matrix.iter() {
        let (fi, fj) = (i as f64, j as f64);
        let diff = fi - fj;

        contrast += diff.powi(2) * p;
        if ivar != 0.0 && jvar != 0.0 {
            correlation += (fi - imean) * (fj - jmean) * p / (ivar * jvar).sqrt();
        }
        energy += p.powi(2);
        if 1.0 + diff.abs() != 0.0 {
            homogeneity += p / (1.0 + diff.abs());
        }
        if p != 0.0 {
            entropy += -(p * p.ln());
        }
        third_order_moment += p * diff.powi(3);
        if i != j {
            inverse_variance += p / diff.powi(2);
        }
        sum_average += 0.5 * (fi * p + fj * p);
        variance += 0.5 * (p * (fi - imean).powi(2) + p * (fj - jmean).powi(2));
        cluster_tendency += p * (fi - imean + fj - jmean).powi(2);
        if (i == 0 && j == 0) || p > maximum_probability {
            maximum_probability = p;
        }
    }

    FeatureVector::new([
        contrast,
        correlation,
        energy,
        homogeneity,
        entropy,
        third_order_moment,
        inverse_variance,
        sum_average,
        variance,
        cluster_tendency,
        maximum_probability,
    ])
}
