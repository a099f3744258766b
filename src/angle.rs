//! Degree-space angle utilities used by the alignment classifier.

/// Unsigned direction angle of an integer displacement, in degrees.
///
/// Computed as `|atan2(dy, dx)|`, which lands in [0, 180]. A zero
/// displacement maps to 0 (horizontal) by the IEEE `atan2(0, 0) = 0`
/// convention.
#[inline]
pub fn displacement_angle_deg(dx: i64, dy: i64) -> f64 {
    (dy as f64).atan2(dx as f64).to_degrees().abs()
}

/// Folds an angle in [0, 180] onto [0, 90], treating opposite travel
/// directions along the same line as equivalent (180 folds onto 0).
#[inline]
pub fn fold_to_quarter(deg: f64) -> f64 {
    deg.min(180.0 - deg)
}

/// True when `deg` lies within `margin` degrees of the horizontal (0)
/// or vertical (90) axis. Both boundaries are inclusive.
#[inline]
pub fn within_margin_of_axes(deg: f64, margin: f64) -> bool {
    deg <= margin || (deg - 90.0).abs() <= margin
}
