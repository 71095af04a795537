// Host-side tests for canvas sizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/viewport.rs"]
mod viewport;

use viewport::*;

#[test]
fn dpr_is_clamped_to_one_and_two() {
    assert_eq!(clamp_dpr(0.5), 1.0);
    assert_eq!(clamp_dpr(1.5), 1.5);
    assert_eq!(clamp_dpr(3.0), 2.0);
    assert_eq!(clamp_dpr(f64::NAN), 1.0);
}

#[test]
fn backing_size_scales_css_box() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
    // Retina-class ratios are capped
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-10.0, 5.0, 1.0), (1, 5));
}
