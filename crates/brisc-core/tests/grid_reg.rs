//! PixelGrid and Nodule regression test
//!
//! Tests grid creation, fixture loading, text serialization through a file,
//! and the nodule's feature map.

use brisc_core::{FeatureSet, NO_VALUE, Nodule, PixelGrid};
use brisc_test::{RegParams, load_test_grid, test_data_path};

// ==========================================================================
// Test 1: Fixture loading
// ==========================================================================

#[test]
fn grid_reg_fixture() {
    let mut rp = RegParams::new("grid_fixture");

    let grid = load_test_grid("nodule_small.txt").expect("load nodule_small.txt");
    rp.compare_values(7.0, grid.width() as f64, 0.0);
    rp.compare_values(6.0, grid.height() as f64, 0.0);
    rp.compare_values(NO_VALUE as f64, grid.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(17.0, grid.get_pixel(6, 3).unwrap() as f64, 0.0);
    rp.compare_values(24.0, grid.count_valid(NO_VALUE) as f64, 0.0);

    let direct = PixelGrid::read_from_file(test_data_path("quadrants.txt")).unwrap();
    rp.compare_true(direct.row(2) == [2, 2, 3, 3], "quadrants row 2");

    rp.compare_true(
        load_test_grid("does_not_exist.txt").is_err(),
        "missing fixture is an error",
    );

    assert!(rp.cleanup(), "grid fixture tests failed");
}

// ==========================================================================
// Test 2: Serialization through a file
// ==========================================================================

#[test]
fn grid_reg_serial_file() {
    let mut rp = RegParams::new("grid_serial");

    let grid = load_test_grid("nodule_small.txt").unwrap();
    let path = std::env::temp_dir().join(format!("brisc_grid_reg_{}.txt", std::process::id()));
    grid.write_to_file(&path).unwrap();
    let back = PixelGrid::read_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    rp.compare_true(back == grid, "grid survives a file write and read");
    let text1 = grid.write_to_string().unwrap();
    let text2 = back.write_to_string().unwrap();
    rp.compare_strings(text1.as_bytes(), text2.as_bytes());

    assert!(rp.cleanup(), "grid serial tests failed");
}

// ==========================================================================
// Test 3: Nodule feature map
// ==========================================================================

#[test]
fn grid_reg_nodule() {
    let mut rp = RegParams::new("grid_nodule");

    let grid = load_test_grid("quadrants.txt").unwrap();
    let mut nodule = Nodule::new("LIDC-0007", grid.clone());
    rp.compare_true(nodule.id() == "LIDC-0007", "nodule id");
    rp.compare_true(nodule.haralick().is_empty(), "new nodule has no features");
    rp.compare_true(nodule.segmented_pixel_data() == &grid, "grid is kept");

    let (data, haralick) = nodule.haralick_target();
    haralick.set("energy", data.width() as f64);
    rp.compare_values(4.0, nodule.haralick().get("energy").unwrap(), 0.0);

    let replacement = PixelGrid::new_with_value(2, 2, NO_VALUE).unwrap();
    nodule.set_segmented_pixel_data(replacement);
    rp.compare_values(0.0, nodule.segmented_pixel_data().count_valid(NO_VALUE) as f64, 0.0);
    // Features stay until an extractor rewrites them
    rp.compare_values(1.0, nodule.haralick().len() as f64, 0.0);

    let mut fs = FeatureSet::new();
    rp.compare_true(fs.set("energy", 0.5).is_none(), "insert returns None");
    rp.compare_values(0.5, fs.set("energy", 0.25).unwrap(), 0.0);

    assert!(rp.cleanup(), "nodule tests failed");
}
