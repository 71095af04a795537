use crate::constants::{DPR_MAX, DPR_MIN};

/// Device pixel ratio limited to the supported range. Non-finite ratios
/// fall back to 1.
#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Canvas backing-store size for a CSS box, never zero in either axis.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_dpr(dpr);
    let px = |css: f64| -> u32 {
        let v = (css.max(0.0) * dpr).round();
        if v.is_finite() {
            (v as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}
