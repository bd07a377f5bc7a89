//! brisc-test - Regression test framework for BRISC
//!
//! Provides [`RegParams`], which numbers each comparison, records every
//! failure with its index, and reports them together at the end of a test:
//!
//! ```ignore
//! use brisc_test::RegParams;
//!
//! let mut rp = RegParams::new("haralick");
//! rp.compare_values(1.0 / 6.0, energy, 1e-12);
//! assert!(rp.cleanup());
//! ```
//!
//! Fixture grids live in `tests/data/grids` at the workspace root and are
//! loaded with [`load_test_grid`].

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

/// Load a fixture grid from the test data directory
///
/// # Arguments
///
/// * `name` - Grid filename (e.g., "quadrants.txt")
pub fn load_test_grid(name: &str) -> TestResult<brisc_core::PixelGrid> {
    let path = test_data_path(name);
    brisc_core::PixelGrid::read_from_file(&path).map_err(|e| TestError::GridLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // brisc-test is at crates/brisc-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/grids/{}", workspace_root(), name)
}
