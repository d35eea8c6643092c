//! Propagator configuration.
//!
//! Every tunable the propagators use lives here; nothing reads a global.

use bevy::prelude::Resource;

use crate::error::OrbitError;
use crate::trail::MAX_TRAIL_CAPACITY;
use crate::types::{G_AU_DAY, J2000_JD};

/// Which propagation strategy provides body positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropagationMode {
    /// Analytic Keplerian elements with secular rates.
    #[default]
    Keplerian,
    /// Direct pairwise gravitational integration seeded from the elements.
    NBody,
}

/// Settings for the N-body alternate mode.
#[derive(Clone, Debug, PartialEq)]
pub struct NBodyConfig {
    /// Gravitational constant in AU³/(M☉·day²). Default: k².
    pub gravitational_constant: f64,
    /// Separations below this (AU) are rejected as singular. Default: 1e-9.
    pub min_separation: f64,
    /// Integration steps per tick. Default: 1.
    pub substeps: u32,
}

impl Default for NBodyConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G_AU_DAY,
            min_separation: 1e-9,
            substeps: 1,
        }
    }
}

/// Configuration for orbit propagation.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PropagatorConfig {
    /// Reference epoch of the element table (Julian date). Default: J2000.
    pub epoch: f64,
    /// Kepler residual tolerance in radians. Default: 1e-6.
    pub tolerance: f64,
    /// Newton iteration cap for the Kepler solver. Default: 30.
    pub max_iterations: u32,
    /// Positions kept per body trail, at most [`MAX_TRAIL_CAPACITY`]. Default: 100.
    pub trail_capacity: usize,
    /// Uniform display scale applied to every position. Default: 1.0.
    pub scale: f64,
    /// Simulated days per tick. Default: 1.0.
    pub tick_size: f64,
    /// Julian date of the first tick. Default: J2000.
    pub start_time: f64,
    /// Start trails full of origin points instead of empty. Default: false.
    pub zero_fill_trails: bool,
    /// Apply the b/c/s/f mean-anomaly terms where a body carries them. Default: false.
    pub apply_outer_perturbations: bool,
    /// Strategy used by [`crate::provider::Propagation`]. Default: Keplerian.
    pub mode: PropagationMode,
    pub nbody: NBodyConfig,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            epoch: J2000_JD,
            tolerance: 1e-6,
            max_iterations: 30,
            trail_capacity: 100,
            scale: 1.0,
            tick_size: 1.0,
            start_time: J2000_JD,
            zero_fill_trails: false,
            apply_outer_perturbations: false,
            mode: PropagationMode::Keplerian,
            nbody: NBodyConfig::default(),
        }
    }
}

impl PropagatorConfig {
    /// Check that every field is usable before a propagator is built from it.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if !self.epoch.is_finite() {
            return Err(OrbitError::InvalidConfig(format!(
                "epoch must be finite, got {}",
                self.epoch
            )));
        }
        if !self.start_time.is_finite() {
            return Err(OrbitError::InvalidConfig(format!(
                "start_time must be finite, got {}",
                self.start_time
            )));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(OrbitError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(OrbitError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(OrbitError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(self.tick_size > 0.0 && self.tick_size.is_finite()) {
            return Err(OrbitError::InvalidConfig(format!(
                "tick_size must be positive, got {}",
                self.tick_size
            )));
        }
        if !(self.nbody.gravitational_constant > 0.0 && self.nbody.gravitational_constant.is_finite()) {
            return Err(OrbitError::InvalidConfig(format!(
                "gravitational_constant must be positive, got {}",
                self.nbody.gravitational_constant
            )));
        }
        if !(self.nbody.min_separation >= 0.0 && self.nbody.min_separation.is_finite()) {
            return Err(OrbitError::InvalidConfig(format!(
                "min_separation must be non-negative, got {}",
                self.nbody.min_separation
            )));
        }
        if self.trail_capacity > MAX_TRAIL_CAPACITY {
            return Err(OrbitError::InvalidConfig(format!(
                "trail_capacity must be at most {}, got {}",
                MAX_TRAIL_CAPACITY, self.trail_capacity
            )));
        }
        if self.nbody.substeps == 0 {
            return Err(OrbitError::InvalidConfig(
                "substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
