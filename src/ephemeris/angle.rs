//! Degree/radian helpers and angle wrapping.

use crate::types::{DEG_TO_RAD, RAD_TO_DEG};

const FULL_TURN_DEG: f64 = 360.0;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Reduce an angle mod 360 keeping the sign of the input, so the result lies in (-360, 360).
#[inline]
pub fn reduce(degrees: f64) -> f64 {
    degrees % FULL_TURN_DEG
}

/// Wrap an angle into [0, 360).
///
/// Tiny negative inputs would otherwise round up to exactly 360 after the
/// correction, so that case collapses to 0.
#[inline]
pub fn normalize_nonnegative(degrees: f64) -> f64 {
    let mut wrapped = degrees % FULL_TURN_DEG;
    if wrapped < 0.0 {
        wrapped += FULL_TURN_DEG;
    }
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}
