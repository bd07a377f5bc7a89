//! FeatureSet - Named scalar features of a nodule
//!
//! A key-unique map from feature name to value. Writing a name that is
//! already present overwrites it, so rerunning an extractor on the same
//! nodule replaces its previous results instead of accumulating them.

use std::collections::BTreeMap;

/// Named scalar feature map
///
/// Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    values: BTreeMap<String, f64>,
}

impl FeatureSet {
    /// Create an empty feature set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether a feature is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get a feature value by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Insert a feature, or overwrite it if already present
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, name: &str, value: f64) -> Option<f64> {
        match self.values.get_mut(name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.values.insert(name.to_string(), value);
                None
            }
        }
    }

    /// Remove a feature, returning its value
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    /// Iterate over (name, value) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Iterate over feature names in name order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
