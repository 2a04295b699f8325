//! Angle conversion and displacement helpers for a downward-y raster plane

/// Convert an angle in degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Displacement of a step of `length` along `heading_deg`
///
/// Angle 0 points along +x and increasing angles rotate toward -y, so the
/// vertical component is negated for surfaces whose y axis grows downward.
pub fn displacement(length: f64, heading_deg: f64) -> (f64, f64) {
    let radians = deg_to_rad(heading_deg);
    (length * radians.cos(), -length * radians.sin())
}

/// Point at parameter `t` along the line from `start` to `end`
pub fn lerp(start: (f64, f64), end: (f64, f64), t: f64) -> (f64, f64) {
    (
        (end.0 - start.0).mul_add(t, start.0),
        (end.1 - start.1).mul_add(t, start.1),
    )
}
