//! Angle unit conversions.
//!
//! The public API takes angles in degrees; the trigonometric internals work
//! in radians. These two helpers are the only place the conversion happens.

use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians / PI) * 180.0
}
