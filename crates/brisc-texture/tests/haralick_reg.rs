//! Haralick feature regression test
//!
//! Checks the eleven statistics of the distance-1 matrices of the
//! quadrant fixture against hand-derived reference values.
//!
//! Run with:
//! ```
//! cargo test -p brisc-texture --test haralick_reg
//! ```

use brisc_core::NO_VALUE;
use brisc_test::{RegParams, load_test_grid};
use brisc_texture::{
    Direction, GrayLevelHeader, HaralickFeature, build_cooccurrence, compute_haralick,
};

const DELTA: f64 = 1e-12;

#[test]
fn haralick_reg_horizontal_hand_computed() {
    let mut rp = RegParams::new("haralick_horizontal");

    let grid = load_test_grid("quadrants.txt").expect("load quadrants.txt");
    let header = GrayLevelHeader::from_grid(&grid, NO_VALUE);
    rp.compare_values(4.0, header.len() as f64, 0.0);

    // 12 horizontal pairs spread evenly over 6 cells: p = 1/6 each
    let m = build_cooccurrence(&grid, &header, Direction::Horizontal, 1).unwrap();
    rp.compare_values(12.0, m.pair_count() as f64, 0.0);
    let fv = compute_haralick(&m);

    rp.compare_values(1.0 / 6.0, fv[HaralickFeature::Energy], DELTA);
    rp.compare_values(1.0 / 3.0, fv[HaralickFeature::Contrast], DELTA);
    rp.compare_values(5.0 / 6.0, fv[HaralickFeature::Homogeneity], DELTA);
    rp.compare_values(6f64.ln(), fv[HaralickFeature::Entropy], DELTA);
    rp.compare_values(-1.0 / 3.0, fv[HaralickFeature::ThirdOrderMoment], DELTA);
    rp.compare_values(1.0 / 3.0, fv[HaralickFeature::InverseVariance], DELTA);
    // Means 4/3 (rows) and 5/3 (columns)
    rp.compare_values(1.5, fv[HaralickFeature::SumAverage], DELTA);
    rp.compare_values(1.0 / 6.0, fv[HaralickFeature::MaximumProbability], DELTA);
    rp.compare_values(0.909090909090909, fv[HaralickFeature::Correlation], 1e-12);
    rp.compare_values(1.22222222222222, fv[HaralickFeature::Variance], 1e-12);
    rp.compare_values(4.66666666666667, fv[HaralickFeature::ClusterTendency], 1e-12);

    assert!(rp.cleanup(), "haralick horizontal test failed");
}

#[test]
fn haralick_reg_other_directions() {
    let mut rp = RegParams::new("haralick_directions");

    let grid = load_test_grid("quadrants.txt").expect("load quadrants.txt");
    let header = GrayLevelHeader::from_grid(&grid, NO_VALUE);

    // (direction, contrast, correlation, energy, thirdOrderMoment, inverseVariance)
    let expected = [
        (
            Direction::UpRight,
            1.22222222222222,
            0.5,
            1.0 / 9.0,
            1.66666666666667,
            0.388888888888889,
        ),
        (
            Direction::Vertical,
            4.0 / 3.0,
            0.609756097560976,
            1.0 / 6.0,
            2.66666666666667,
            0.0833333333333333,
        ),
        (
            Direction::UpLeft,
            2.11111111111111,
            0.5,
            1.0 / 9.0,
            5.0,
            0.290123456790123,
        ),
    ];

    for (direction, contrast, correlation, energy, tom, inv_var) in expected {
        eprintln!("=== {:?} ===", direction);
        let m = build_cooccurrence(&grid, &header, direction, 1).unwrap();
        let fv = compute_haralick(&m);
        rp.compare_values(contrast, fv[HaralickFeature::Contrast], 1e-12);
        rp.compare_values(correlation, fv[HaralickFeature::Correlation], 1e-12);
        rp.compare_values(energy, fv[HaralickFeature::Energy], 1e-12);
        rp.compare_values(tom, fv[HaralickFeature::ThirdOrderMoment], 1e-12);
        rp.compare_values(inv_var, fv[HaralickFeature::InverseVariance], 1e-12);
        rp.compare_values(1.5, fv[HaralickFeature::SumAverage], 1e-12);
    }

    assert!(rp.cleanup(), "haralick direction test failed");
}

#[test]
fn haralick_reg_degenerate_matrix() {
    let mut rp = RegParams::new("haralick_degenerate");

    // Distance 4 on a 4x4 grid leaves no pixel pair in any direction
    let grid = load_test_grid("quadrants.txt").expect("load quadrants.txt");
    let header = GrayLevelHeader::from_grid(&grid, NO_VALUE);
    for direction in Direction::ALL {
        let m = build_cooccurrence(&grid, &header, direction, 4).unwrap();
        rp.compare_values(0.0, m.pair_count() as f64, 0.0);
        let fv = compute_haralick(&m);
        for (_, value) in fv.iter() {
            rp.compare_values(f64::NAN, value, 0.0);
        }
    }

    assert!(rp.cleanup(), "haralick degenerate test failed");
}
