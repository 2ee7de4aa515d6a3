// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn translate_css_uses_two_decimals() {
    assert_eq!(translate_x_css(-12.345), "translate3d(-12.35px, 0px, 0px)");
    assert_eq!(translate_x_css(0.0), "translate3d(0.00px, 0px, 0px)");
}

#[test]
fn cycle_width_requires_duplicate_to_the_right() {
    assert_eq!(measured_cycle_width(24.0, 2424.0), Some(2400.0));
    assert_eq!(measured_cycle_width(24.0, 24.0), None);
    assert_eq!(measured_cycle_width(100.0, 0.0), None);
    assert_eq!(measured_cycle_width(0.0, f64::NAN), None);
}

#[test]
fn seam_drift_tolerance() {
    assert!(!seam_drift_exceeds(0.4, 0.5));
    assert!(seam_drift_exceeds(-0.6, 0.5));
    assert!(!seam_drift_exceeds(f64::NAN, 0.5));
}

#[test]
fn duplicate_index_is_half_length() {
    assert_eq!(duplicate_index(16), Some(8));
    assert_eq!(duplicate_index(0), None);
    assert_eq!(duplicate_index(1), None);
}

#[test]
fn visible_items_are_space_separated() {
    assert_eq!(visible_items_attr([6, 7, 0, 1]), "6 7 0 1");
    assert_eq!(visible_items_attr([3]), "3");
    assert_eq!(visible_items_attr(Vec::new()), "");
}
