//! Unit conventions shared by the element models.

use std::f64::consts::PI;

/// Scale factor for characteristic values declared in micro-units
/// (microfarads, microhenrys). Applied exactly once, inside the
/// impedance formulas.
pub const MICRO: f64 = 1.0e-6;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}
