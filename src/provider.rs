//! Interchangeable sources of per-tick body positions.
//!
//! The host only needs "one position per body per tick, plus trails", so
//! both propagation modes sit behind [`PositionProvider`] and the
//! configured mode picks one through [`Propagation::from_config`].

use bevy::log::info;
use bevy::math::DVec3;

use crate::config::{PropagationMode, PropagatorConfig};
use crate::ephemeris::OrbitalElements;
use crate::error::OrbitError;
use crate::physics::NBodyIntegrator;
use crate::propagator::OrbitPropagator;
use crate::trail::{TrailBuffer, record};
use crate::types::SimulationClock;

/// Something that yields one position per body for a requested time.
pub trait PositionProvider {
    /// Number of positions returned per call.
    fn body_count(&self) -> usize;

    /// Positions (display units) at `time` (Julian date), appended to the trails.
    ///
    /// On error no trail changes.
    fn advance_to(&mut self, time: f64) -> Result<Vec<DVec3>, OrbitError>;

    fn trails(&self) -> &[TrailBuffer];

    fn clock(&self) -> &SimulationClock;

    fn clock_mut(&mut self) -> &mut SimulationClock;

    /// Compute positions at the clock's current time, then advance the clock.
    ///
    /// The clock only moves when the positions were produced.
    fn tick(&mut self) -> Result<Vec<DVec3>, OrbitError> {
        let time = self.clock().current();
        let positions = self.advance_to(time)?;
        self.clock_mut().advance();
        Ok(positions)
    }
}

impl PositionProvider for OrbitPropagator {
    fn body_count(&self) -> usize {
        self.bodies().len()
    }

    fn advance_to(&mut self, time: f64) -> Result<Vec<DVec3>, OrbitError> {
        self.step(time)
    }

    fn trails(&self) -> &[TrailBuffer] {
        OrbitPropagator::trails(self)
    }

    fn clock(&self) -> &SimulationClock {
        OrbitPropagator::clock(self)
    }

    fn clock_mut(&mut self) -> &mut SimulationClock {
        OrbitPropagator::clock_mut(self)
    }
}

impl PositionProvider for NBodyIntegrator {
    fn body_count(&self) -> usize {
        self.reported_count()
    }

    /// Integrates from the current state time to `time`.
    fn advance_to(&mut self, time: f64) -> Result<Vec<DVec3>, OrbitError> {
        if !time.is_finite() {
            return Err(OrbitError::NonFiniteTime(time));
        }
        let span = time - self.time();
        if span != 0.0 {
            self.advance(span)?;
        }
        let positions = self.reported_positions();
        record(self.trails_mut(), &positions);
        Ok(positions)
    }

    fn trails(&self) -> &[TrailBuffer] {
        NBodyIntegrator::trails(self)
    }

    fn clock(&self) -> &SimulationClock {
        NBodyIntegrator::clock(self)
    }

    fn clock_mut(&mut self) -> &mut SimulationClock {
        NBodyIntegrator::clock_mut(self)
    }
}

/// The provider selected by [`PropagatorConfig::mode`].
#[derive(Clone, Debug)]
pub enum Propagation {
    Keplerian(OrbitPropagator),
    NBody(NBodyIntegrator),
}

impl Propagation {
    /// Build the provider for the configured mode over `bodies`.
    pub fn from_config(bodies: Vec<OrbitalElements>, config: PropagatorConfig) -> Result<Self, OrbitError> {
        let propagation = match config.mode {
            PropagationMode::Keplerian => Self::Keplerian(OrbitPropagator::new(bodies, config)?),
            PropagationMode::NBody => {
                config.validate()?;
                Self::NBody(NBodyIntegrator::from_elements(bodies, &config)?)
            }
        };
        info!("Propagation mode: {:?}", propagation.mode());
        Ok(propagation)
    }

    pub fn mode(&self) -> PropagationMode {
        match self {
            Self::Keplerian(_) => PropagationMode::Keplerian,
            Self::NBody(_) => PropagationMode::NBody,
        }
    }

    fn provider(&self) -> &dyn PositionProvider {
        match self {
            Self::Keplerian(p) => p,
            Self::NBody(p) => p,
        }
    }

    fn provider_mut(&mut self) -> &mut dyn PositionProvider {
        match self {
            Self::Keplerian(p) => p,
            Self::NBody(p) => p,
        }
    }
}

impl PositionProvider for Propagation {
    fn body_count(&self) -> usize {
        self.provider().body_count()
    }

    fn advance_to(&mut self, time: f64) -> Result<Vec<DVec3>, OrbitError> {
        self.provider_mut().advance_to(time)
    }

    fn trails(&self) -> &[TrailBuffer] {
        self.provider().trails()
    }

    fn clock(&self) -> &SimulationClock {
        self.provider().clock()
    }

    fn clock_mut(&mut self) -> &mut SimulationClock {
        self.provider_mut().clock_mut()
    }
}
