// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn cell_mappings_stay_within_visible_bounds() {
    // Scale never collapses or doubles
    assert!(SCALE_BASE > 0.0);
    assert!(SCALE_BASE + SCALE_SPAN < 2.0);

    // Opacity is a valid alpha across the whole intensity range
    assert!(OPACITY_BASE >= 0.0);
    assert!(OPACITY_BASE + OPACITY_SPAN <= 1.0);

    // Threshold splits the [0, 1] intensity range
    assert!(STROKE_THICK_THRESHOLD > 0.0 && STROKE_THICK_THRESHOLD < 1.0);
    assert!(STROKE_THICK > STROKE_THIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn regular_grid_is_denser_than_compact() {
    assert!(GRID_REGULAR.0 > GRID_COMPACT.0);
    assert!(GRID_REGULAR.1 > GRID_COMPACT.1);
    // both grids are wider than tall
    assert!(GRID_COMPACT.1 > GRID_COMPACT.0);
    assert!(GRID_REGULAR.1 > GRID_REGULAR.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lines_travel_is_centered_on_rest_position() {
    // Offset puts the line group halfway through its travel at mid-scroll
    assert_eq!(LINES_OFFSET_PX, -LINES_TRAVEL_PX / 2.0);
    assert!(SECTION_MARKER_Y_PX > 0.0);
    assert!(COMPACT_MAX_WIDTH_PX > 0.0);
}
