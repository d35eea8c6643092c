//! Direct N-body integration, the alternate propagation mode.
//!
//! Units: AU, days, solar masses. The state is advanced with
//! [`euler_step`] from accelerations computed by [`pairwise_accelerations`].

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::log::info;
use bevy::math::DVec3;

pub use gravity::{pairwise_accelerations, potential_energy};
pub use integrator::euler_step;

use crate::config::{NBodyConfig, PropagatorConfig};
use crate::ephemeris::OrbitalElements;
use crate::error::OrbitError;
use crate::propagator::OrbitPropagator;
use crate::trail::{TrailBuffer, trails_for};
use crate::types::SimulationClock;

/// Mass of the central body added by [`NBodyIntegrator::from_elements`] (M☉).
const CENTRAL_MASS: f64 = 1.0;

/// Upper bound on integration steps taken by a single [`NBodyIntegrator::advance`].
pub const MAX_STEPS_PER_ADVANCE: u64 = 10_000_000;

/// Half-width of the central difference used to seed velocities (days).
const SEED_HALF_INTERVAL: f64 = 0.5;

/// Physical state of one body.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass {
    pub name: String,
    /// Mass in solar masses
    pub mass: f64,
    /// Position in AU
    pub position: DVec3,
    /// Velocity in AU/day
    pub velocity: DVec3,
}

impl PointMass {
    pub fn new(name: impl Into<String>, mass: f64, position: DVec3, velocity: DVec3) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
        }
    }

    pub fn momentum(&self) -> DVec3 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// N-body state plus the bookkeeping needed to act as a position provider.
#[derive(Clone, Debug)]
pub struct NBodyIntegrator {
    bodies: Vec<PointMass>,
    gravitational_constant: f64,
    min_separation: f64,
    substeps: u32,
    /// Time of the current state (Julian date)
    time: f64,
    /// Body whose position is subtracted from reported positions, if any
    central: Option<usize>,
    scale: f64,
    clock: SimulationClock,
    trails: Vec<TrailBuffer>,
}

impl NBodyIntegrator {
    /// Create an integrator over explicit point masses at `start_time`.
    pub fn new(bodies: Vec<PointMass>, config: &NBodyConfig, start_time: f64) -> Result<Self, OrbitError> {
        if bodies.is_empty() {
            return Err(OrbitError::EmptyTable);
        }
        if !start_time.is_finite() {
            return Err(OrbitError::NonFiniteTime(start_time));
        }
        for body in &bodies {
            let finite = body.mass.is_finite() && body.position.is_finite() && body.velocity.is_finite();
            if !finite || body.mass < 0.0 {
                return Err(OrbitError::InvalidConfig(format!(
                    "body {} has a non-finite state or negative mass",
                    body.name
                )));
            }
        }

        Ok(Self {
            gravitational_constant: config.gravitational_constant,
            min_separation: config.min_separation,
            substeps: config.substeps.max(1),
            time: start_time,
            central: None,
            scale: 1.0,
            clock: SimulationClock::new(start_time, 1.0),
            trails: trails_for(bodies.len(), 0, false),
            bodies,
        })
    }

    /// Seed an N-body system from an element table.
    ///
    /// Every body starts at its Keplerian position at `config.start_time`,
    /// with velocity from a central difference of Keplerian positions. A
    /// one-solar-mass Sun is appended after the table bodies and the total
    /// momentum is removed so the system does not drift. Reported positions
    /// are relative to that Sun, one per table body, in table order.
    pub fn from_elements(elements: Vec<OrbitalElements>, config: &PropagatorConfig) -> Result<Self, OrbitError> {
        let kepler_config = PropagatorConfig {
            scale: 1.0,
            trail_capacity: 0,
            ..config.clone()
        };
        let kepler = OrbitPropagator::new(elements, kepler_config)?;
        let t0 = config.start_time;

        let mut bodies = Vec::with_capacity(kepler.bodies().len() + 1);
        for (index, body) in kepler.bodies().iter().enumerate() {
            let position = kepler.position_at(index, t0)?.position;
            let before = kepler.position_at(index, t0 - SEED_HALF_INTERVAL)?.position;
            let after = kepler.position_at(index, t0 + SEED_HALF_INTERVAL)?.position;
            let velocity = (after - before) / (2.0 * SEED_HALF_INTERVAL);
            bodies.push(PointMass::new(body.name.clone(), body.mass, position, velocity));
        }
        bodies.push(PointMass::new("Sun", CENTRAL_MASS, DVec3::ZERO, DVec3::ZERO));

        let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
        let drift: DVec3 = bodies.iter().map(PointMass::momentum).sum::<DVec3>() / total_mass;
        for body in &mut bodies {
            body.velocity -= drift;
        }

        let central = bodies.len() - 1;
        let mut integrator = Self::new(bodies, &config.nbody, t0)?;
        integrator.central = Some(central);
        integrator.scale = config.scale;
        integrator.clock = SimulationClock::new(t0, config.tick_size);
        integrator.trails = trails_for(central, config.trail_capacity, config.zero_fill_trails);

        info!(
            "N-body integrator seeded from {} element entries at JD {}",
            central,
            t0
        );

        Ok(integrator)
    }

    pub fn bodies(&self) -> &[PointMass] {
        &self.bodies
    }

    /// Time of the current state (Julian date).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Gravitational acceleration on every body at the current positions.
    pub fn accelerations(&self) -> Result<Vec<DVec3>, OrbitError> {
        pairwise_accelerations(&self.bodies, self.gravitational_constant, self.min_separation)
    }

    /// Advance the system by `dt` days and return every body's new position (AU).
    ///
    /// On error (non-finite `dt`, coincident bodies) the state is unchanged.
    pub fn step(&mut self, dt: f64) -> Result<Vec<DVec3>, OrbitError> {
        if !dt.is_finite() {
            return Err(OrbitError::NonFiniteTime(dt));
        }
        let acc = self.accelerations()?;
        euler_step(&mut self.bodies, &acc, dt);
        self.time += dt;
        Ok(self.bodies.iter().map(|b| b.position).collect())
    }

    /// Advance the system by `span` days.
    ///
    /// The span is cut into chunks no longer than the clock's tick size and
    /// each chunk into the configured substeps, so a long jump is integrated
    /// with the same step length as regular ticks. All steps succeed or the
    /// state is rolled back to where it started.
    pub fn advance(&mut self, span: f64) -> Result<(), OrbitError> {
        if !span.is_finite() {
            return Err(OrbitError::NonFiniteTime(span));
        }
        // Slack keeps accumulated rounding from adding a chunk to a whole-tick span
        let chunks = (span.abs() / self.clock.tick_size() - 1e-9).ceil().max(1.0);
        let steps = chunks * f64::from(self.substeps);
        if steps > MAX_STEPS_PER_ADVANCE as f64 {
            return Err(OrbitError::SpanTooLong {
                span,
                steps: MAX_STEPS_PER_ADVANCE,
            });
        }
        let steps = steps as u64;
        let dt = span / steps as f64;

        let snapshot = (self.bodies.clone(), self.time);
        for _ in 0..steps {
            if let Err(err) = self.step(dt) {
                (self.bodies, self.time) = snapshot;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Positions as reported to a host: relative to the central body when
    /// there is one (which is then omitted), scaled for display.
    pub fn reported_positions(&self) -> Vec<DVec3> {
        match self.central {
            Some(central) => {
                let origin = self.bodies[central].position;
                self.bodies
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != central)
                    .map(|(_, b)| (b.position - origin) * self.scale)
                    .collect()
            }
            None => self.bodies.iter().map(|b| b.position * self.scale).collect(),
        }
    }

    /// Number of positions reported per tick.
    pub fn reported_count(&self) -> usize {
        match self.central {
            Some(_) => self.bodies.len() - 1,
            None => self.bodies.len(),
        }
    }

    /// Total linear momentum Σ mᵢvᵢ.
    pub fn total_momentum(&self) -> DVec3 {
        self.bodies.iter().map(PointMass::momentum).sum()
    }

    /// Kinetic plus pairwise potential energy.
    ///
    /// Undefined for bodies within `min_separation` of each other, which is
    /// reported as [`OrbitError::CoincidentBodies`].
    pub fn total_energy(&self) -> Result<f64, OrbitError> {
        let kinetic: f64 = self.bodies.iter().map(PointMass::kinetic_energy).sum();
        let potential = potential_energy(&self.bodies, self.gravitational_constant, self.min_separation)?;
        Ok(kinetic + potential)
    }

    /// Mass-weighted mean position, or the origin for an all-massless system.
    pub fn center_of_mass(&self) -> DVec3 {
        let total: f64 = self.bodies.iter().map(|b| b.mass).sum();
        if total == 0.0 {
            return DVec3::ZERO;
        }
        self.bodies.iter().map(|b| b.position * b.mass).sum::<DVec3>() / total
    }

    pub fn trails(&self) -> &[TrailBuffer] {
        &self.trails
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    pub(crate) fn trails_mut(&mut self) -> &mut [TrailBuffer] {
        &mut self.trails
    }
}
