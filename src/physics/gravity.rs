//! Pairwise Newtonian gravity (O(N²) direct summation).

use bevy::math::DVec3;

use super::PointMass;
use crate::error::OrbitError;

/// Gravitational acceleration on every body from every other body.
///
/// Each pair is evaluated once and applied equal and opposite, so the
/// mass-weighted accelerations sum to zero up to rounding.
///
/// # Arguments
/// * `bodies` - Point masses (AU, solar masses)
/// * `gravitational_constant` - G in AU³/(M☉·day²)
/// * `min_separation` - Pairs closer than this (AU) are rejected as singular
///
/// # Returns
/// Acceleration per body in AU/day², in body order
pub fn pairwise_accelerations(
    bodies: &[PointMass],
    gravitational_constant: f64,
    min_separation: f64,
) -> Result<Vec<DVec3>, OrbitError> {
    let mut acc = vec![DVec3::ZERO; bodies.len()];
    let min_sq = min_separation * min_separation;

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let delta = bodies[j].position - bodies[i].position;
            let r_squared = delta.length_squared();

            if r_squared <= min_sq {
                return Err(OrbitError::CoincidentBodies {
                    first: bodies[i].name.clone(),
                    second: bodies[j].name.clone(),
                    separation: r_squared.sqrt(),
                });
            }

            // G / r³ shared by both directions of the pair
            let r = r_squared.sqrt();
            let g_over_r3 = gravitational_constant / (r_squared * r);

            acc[i] += delta * (bodies[j].mass * g_over_r3);
            acc[j] -= delta * (bodies[i].mass * g_over_r3);
        }
    }

    Ok(acc)
}

/// Pairwise potential energy `-Σ G·mᵢ·mⱼ / rᵢⱼ` (each pair counted once).
///
/// Pairs closer than `min_separation` are rejected the same way
/// [`pairwise_accelerations`] rejects them.
pub fn potential_energy(
    bodies: &[PointMass],
    gravitational_constant: f64,
    min_separation: f64,
) -> Result<f64, OrbitError> {
    let mut energy = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let r = (bodies[j].position - bodies[i].position).length();
            if r <= min_separation {
                return Err(OrbitError::CoincidentBodies {
                    first: bodies[i].name.clone(),
                    second: bodies[j].name.clone(),
                    separation: r,
                });
            }
            energy -= gravitational_constant * bodies[i].mass * bodies[j].mass / r;
        }
    }
    Ok(energy)
}
