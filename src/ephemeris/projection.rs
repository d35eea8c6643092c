//! Conversion from instantaneous orbital elements to inertial-frame positions.

use bevy::math::DVec3;

use super::angle::{normalize_nonnegative, to_degrees, to_radians};
use super::elements::DerivedElements;

/// True anomaly ν in degrees, in [0, 360).
///
/// Uses the half-angle form `tan(ν/2) = √((1+e)/(1-e))·tan(E/2)` evaluated
/// with atan2 so the quadrant comes out right without branching on sign.
pub fn true_anomaly(eccentricity: f64, eccentric_anomaly_deg: f64) -> f64 {
    let half_e = to_radians(eccentric_anomaly_deg) / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    normalize_nonnegative(to_degrees(2.0 * y.atan2(x)))
}

/// Heliocentric distance `a·(1 - e·cos E)·scale`.
pub fn radius(orbit_size: f64, eccentricity: f64, eccentric_anomaly_deg: f64, scale: f64) -> f64 {
    orbit_size * (1.0 - eccentricity * to_radians(eccentric_anomaly_deg).cos()) * scale
}

/// Position in the common ecliptic frame.
///
/// The argument of latitude is `ν + ϖ - Ω`; inclination and node rotate the
/// orbital plane into the reference plane.
pub fn project(elements: &DerivedElements, eccentric_anomaly_deg: f64, scale: f64) -> DVec3 {
    let e = elements.eccentricity;
    let nu = true_anomaly(e, eccentric_anomaly_deg);
    let r = radius(elements.orbit_size, e, eccentric_anomaly_deg, scale);

    let (sin_node, cos_node) = to_radians(elements.ascending_node).sin_cos();
    let (sin_i, cos_i) = to_radians(elements.inclination).sin_cos();
    let (sin_u, cos_u) =
        to_radians(nu + elements.perihelion_longitude - elements.ascending_node).sin_cos();

    DVec3::new(
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * sin_u * sin_i,
    )
}
