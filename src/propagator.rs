//! Keplerian orbit propagator.
//!
//! Turns the element table into one heliocentric position per body per
//! tick: evolve the elements to the requested time, solve Kepler's
//! equation, project into the ecliptic frame, then append to the trails.

use bevy::log::{debug, info, warn};
use bevy::math::DVec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::PropagatorConfig;
use crate::ephemeris::{
    DerivedElements, KeplerSolution, KeplerSolver, OrbitalElements, centuries_since, project,
};
use crate::error::OrbitError;
use crate::trail::{TrailBuffer, record, trails_for};
use crate::types::SimulationClock;

/// Position of one body together with the values that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPosition {
    pub position: DVec3,
    pub elements: DerivedElements,
    pub solution: KeplerSolution,
}

/// Analytic propagator over a fixed, ordered element table.
///
/// The element table and configuration never change after construction;
/// `step` only mutates the trails and the cached last positions.
#[derive(Clone, Debug)]
pub struct OrbitPropagator {
    bodies: Vec<OrbitalElements>,
    trails: Vec<TrailBuffer>,
    config: PropagatorConfig,
    solver: KeplerSolver,
    clock: SimulationClock,
    last_positions: Vec<DVec3>,
}

impl OrbitPropagator {
    /// Build a propagator with one empty trail per body.
    pub fn new(bodies: Vec<OrbitalElements>, config: PropagatorConfig) -> Result<Self, OrbitError> {
        config.validate()?;
        validate_table(&bodies)?;

        let trails = trails_for(bodies.len(), config.trail_capacity, config.zero_fill_trails);
        let solver = KeplerSolver::from_config(&config);
        let clock = SimulationClock::new(config.start_time, config.tick_size);

        info!(
            "Orbit propagator initialized: {} bodies, trail capacity {}, epoch JD {}",
            bodies.len(),
            config.trail_capacity,
            config.epoch
        );

        Ok(Self {
            bodies,
            trails,
            config,
            solver,
            clock,
            last_positions: Vec::new(),
        })
    }

    /// Compute every body's position at `current_time` (Julian date) and
    /// append it to that body's trail.
    ///
    /// Either all bodies succeed and all trails grow by one point, or an
    /// error is returned and no trail changes.
    pub fn step(&mut self, current_time: f64) -> Result<Vec<DVec3>, OrbitError> {
        let centuries = centuries_since(current_time, self.config.epoch)?;
        let samples = self.compute_all(centuries)?;

        for (body, sample) in self.bodies.iter().zip(&samples) {
            if !sample.solution.converged {
                warn!(
                    "Kepler solver did not converge for {} after {} iterations (residual {:.3e} rad), using best effort",
                    body.name, sample.solution.iterations, sample.solution.residual
                );
            }
        }

        let positions: Vec<DVec3> = samples.iter().map(|s| s.position).collect();
        record(&mut self.trails, &positions);
        self.last_positions.clone_from(&positions);
        Ok(positions)
    }

    /// Position of a single body at `time` without touching any trail.
    pub fn position_at(&self, index: usize, time: f64) -> Result<BodyPosition, OrbitError> {
        let body = self.bodies.get(index).ok_or(OrbitError::UnknownBody {
            index,
            count: self.bodies.len(),
        })?;
        let centuries = centuries_since(time, self.config.epoch)?;
        self.compute_single(body, centuries)
    }

    pub fn bodies(&self) -> &[OrbitalElements] {
        &self.bodies
    }

    pub fn config(&self) -> &PropagatorConfig {
        &self.config
    }

    pub fn trail(&self, index: usize) -> Option<&TrailBuffer> {
        self.trails.get(index)
    }

    /// Positions returned by the most recent successful step (empty before the first).
    pub fn last_positions(&self) -> &[DVec3] {
        &self.last_positions
    }

    /// Every body's trail, in body order, each oldest to newest.
    pub fn trails(&self) -> &[TrailBuffer] {
        &self.trails
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_all(&self, centuries: f64) -> Result<Vec<BodyPosition>, OrbitError> {
        self.bodies
            .iter()
            .map(|body| self.compute_single(body, centuries))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn compute_all(&self, centuries: f64) -> Result<Vec<BodyPosition>, OrbitError> {
        self.bodies
            .par_iter()
            .map(|body| self.compute_single(body, centuries))
            .collect()
    }

    fn compute_single(&self, body: &OrbitalElements, centuries: f64) -> Result<BodyPosition, OrbitError> {
        let elements = body.evolve_with_terms(centuries, self.config.apply_outer_perturbations);

        let solution = self
            .solver
            .solve(elements.eccentricity, elements.mean_anomaly)
            .map_err(|err| match err {
                OrbitError::EccentricityOutOfRange { eccentricity, .. } => {
                    OrbitError::EccentricityOutOfRange {
                        body: body.name.clone(),
                        eccentricity,
                    }
                }
                other => other,
            })?;

        let position = project(&elements, solution.eccentric_anomaly, self.config.scale);

        debug!(
            "{} (#{}) T={:.6}: a={} e={} i={} Ω={} ϖ={} L={} M={} E={} -> ({}, {}, {})",
            body.name,
            body.index,
            centuries,
            elements.orbit_size,
            elements.eccentricity,
            elements.inclination,
            elements.ascending_node,
            elements.perihelion_longitude,
            elements.mean_longitude,
            elements.mean_anomaly,
            solution.eccentric_anomaly,
            position.x,
            position.y,
            position.z
        );

        Ok(BodyPosition {
            position,
            elements,
            solution,
        })
    }
}

/// Reject tables that would break the index-order invariant or the solver's domain.
fn validate_table(bodies: &[OrbitalElements]) -> Result<(), OrbitError> {
    if bodies.is_empty() {
        return Err(OrbitError::EmptyTable);
    }
    for (position, body) in bodies.iter().enumerate() {
        if body.index != position {
            return Err(OrbitError::IndexMismatch {
                expected: position,
                found: body.index,
            });
        }
        if !(0.0..1.0).contains(&body.base.eccentricity) {
            return Err(OrbitError::EccentricityOutOfRange {
                body: body.name.clone(),
                eccentricity: body.base.eccentricity,
            });
        }
    }
    Ok(())
}
