//! Test utilities for orbit propagation tests.
//!
//! Provides fixtures for small element tables and N-body systems, and
//! assertions for the invariants the propagators must keep.

use bevy::math::DVec3;

use crate::config::NBodyConfig;
use crate::ephemeris::{ElementSet, OrbitalElements};
use crate::physics::{NBodyIntegrator, PointMass};
use crate::types::{GAUSSIAN_GRAVITATIONAL_CONSTANT, J2000_JD};

/// Fixtures for creating test element tables and systems.
pub mod fixtures {
    use super::*;

    /// Earth-like body with no secular rates.
    pub fn earth_like() -> OrbitalElements {
        OrbitalElements::new(
            "Earth-like",
            0,
            ElementSet::new(1.0, 0.0167, 0.0, 100.5, 102.9, 0.0),
            ElementSet::default(),
        )
    }

    /// Body with the given base elements and no rates, at `index`.
    pub fn static_body(index: usize, semi_major_axis: f64, eccentricity: f64, inclination: f64) -> OrbitalElements {
        OrbitalElements::new(
            format!("Body {}", index),
            index,
            ElementSet::new(semi_major_axis, eccentricity, inclination, 45.0 * index as f64, 30.0, 60.0),
            ElementSet::default(),
        )
    }

    /// Sun (index 0) and an Earth-mass planet on a circular 1 AU orbit.
    pub fn sun_and_planet() -> NBodyIntegrator {
        let bodies = vec![
            PointMass::new("Sun", 1.0, DVec3::ZERO, DVec3::ZERO),
            PointMass::new(
                "Planet",
                3.0e-6,
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, GAUSSIAN_GRAVITATIONAL_CONSTANT, 0.0),
            ),
        ];
        NBodyIntegrator::new(bodies, &NBodyConfig::default(), J2000_JD)
            .expect("two-body fixture is valid")
    }
}

/// Assertion helpers for propagation invariants.
pub mod assertions {
    use super::*;

    /// Residual of Kepler's equation `|E - e·sin(E) - M|` in radians, with
    /// both angles in degrees and M reduced into [0, 360).
    pub fn kepler_residual(eccentricity: f64, eccentric_anomaly_deg: f64, mean_anomaly_deg: f64) -> f64 {
        let e_rad = eccentric_anomaly_deg.to_radians();
        let m_rad = mean_anomaly_deg.rem_euclid(360.0).to_radians();
        (e_rad - eccentricity * e_rad.sin() - m_rad).abs()
    }

    /// Assert that total momentum changed by at most `tolerance`.
    pub fn assert_momentum_conserved(initial: DVec3, current: DVec3, tolerance: f64) {
        let drift = (current - initial).length();
        assert!(
            drift <= tolerance,
            "momentum drifted by {:.3e} (tolerance {:.3e}): {:?} -> {:?}",
            drift,
            tolerance,
            initial,
            current
        );
    }

    /// Assert a position lies within `[min, max]` AU of the origin.
    pub fn assert_radius_between(position: DVec3, min: f64, max: f64) {
        let r = position.length();
        assert!(r >= min && r <= max, "radius {} outside [{}, {}]", r, min, max);
    }
}
