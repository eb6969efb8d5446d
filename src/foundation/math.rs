pub(crate) const FULL_TURN_DEG: f64 = 360.0;

/// Wraps a hue into `[0, 360)`.
pub(crate) fn wrap_hue(deg: f64) -> f64 {
    let h = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= FULL_TURN_DEG { 0.0 } else { h }
}

pub(crate) fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Shortest angular distance between two hues, in `[0, 180]`.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = wrap_hue(a - b);
    d.min(FULL_TURN_DEG - d)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
