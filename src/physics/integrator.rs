//! Time stepping for the N-body mode.
//!
//! One step:
//! 1. a = acceleration(x)
//! 2. v_new = v + a·dt
//! 3. x_new = x + v·dt   (old velocity)
//!
//! The ordering is part of the observable behavior (it sets the energy
//! drift) and must not be swapped for a higher-order scheme.

use bevy::math::DVec3;

use super::PointMass;

/// Advance every body by `dt` using accelerations evaluated at the old positions.
pub fn euler_step(bodies: &mut [PointMass], accelerations: &[DVec3], dt: f64) {
    for (body, &acc) in bodies.iter_mut().zip(accelerations) {
        let old_velocity = body.velocity;
        body.velocity = old_velocity + acc * dt;
        body.position += old_velocity * dt;
    }
}
