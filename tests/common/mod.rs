//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use orrery::ephemeris::{ElementSet, OrbitalElements};
use orrery::physics::PointMass;
use orrery::types::GAUSSIAN_GRAVITATIONAL_CONSTANT;

/// Earth-like body at index `index` with no secular rates.
pub fn earth_like(index: usize) -> OrbitalElements {
    OrbitalElements::new(
        "Earth-like",
        index,
        ElementSet::new(1.0, 0.0167, 0.0, 100.5, 102.9, 0.0),
        ElementSet::default(),
    )
}

/// Sun plus a massive planet on a circular orbit of radius `distance_au`.
pub fn star_and_planet(distance_au: f64, planet_mass: f64) -> Vec<PointMass> {
    let v = GAUSSIAN_GRAVITATIONAL_CONSTANT / distance_au.sqrt();
    vec![
        PointMass::new("Sun", 1.0, DVec3::ZERO, DVec3::ZERO),
        PointMass::new(
            "Planet",
            planet_mass,
            DVec3::new(distance_au, 0.0, 0.0),
            DVec3::new(0.0, v, 0.0),
        ),
    ]
}

/// Three bodies in a loose hierarchical arrangement, inclined out of the plane.
pub fn three_body_system() -> Vec<PointMass> {
    vec![
        PointMass::new("Primary", 1.0, DVec3::ZERO, DVec3::new(0.0, 0.0, 1e-5)),
        PointMass::new(
            "Inner",
            1e-3,
            DVec3::new(5.2, 0.0, 0.1),
            DVec3::new(0.0, 0.00754, 0.0),
        ),
        PointMass::new(
            "Outer",
            3e-4,
            DVec3::new(0.0, -9.5, -0.3),
            DVec3::new(0.00558, 0.0, 0.0),
        ),
    ]
}

/// Sum of the magnitudes of every body's momentum, the scale of rounding error.
pub fn momentum_scale(bodies: &[PointMass]) -> f64 {
    bodies.iter().map(|b| b.momentum().length()).sum::<f64>().max(1e-30)
}
