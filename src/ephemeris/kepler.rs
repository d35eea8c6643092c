//! Kepler equation solver using Newton's method.

use std::f64::consts::{PI, TAU};

use super::angle::to_degrees;
use crate::config::PropagatorConfig;
use crate::error::OrbitError;

/// Eccentricity at and above which the iteration is seeded at π instead of M.
const HIGH_ECCENTRICITY_SEED: f64 = 0.8;

/// Returned eccentric anomalies are rounded to this many decimal places (degrees).
const ROUNDING_SCALE: f64 = 1e6;

/// Outcome of one Kepler solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in degrees, rounded to 6 decimals, in [0, 360]
    pub eccentric_anomaly: f64,
    /// Newton iterations performed
    pub iterations: u32,
    /// |E - e·sin(E) - M| in radians at the last iterate (before rounding)
    pub residual: f64,
    /// Whether the residual dropped to the tolerance within the iteration cap
    pub converged: bool,
}

/// Newton–Raphson solver for M = E - e·sin(E) on elliptic orbits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    /// Residual tolerance in radians
    pub tolerance: f64,
    /// Iteration cap
    pub max_iterations: u32,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 30,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn from_config(config: &PropagatorConfig) -> Self {
        Self::new(config.tolerance, config.max_iterations)
    }

    /// Solve Kepler's equation for the eccentric anomaly.
    ///
    /// # Arguments
    /// * `eccentricity` - Orbital eccentricity, must lie in [0, 1)
    /// * `mean_anomaly_deg` - Mean anomaly M in degrees (any finite value)
    ///
    /// # Returns
    /// The eccentric anomaly in degrees together with convergence diagnostics.
    ///
    /// Running out of iterations is not an error: the last iterate comes back
    /// with `converged == false` and callers decide whether to use it.
    pub fn solve(&self, eccentricity: f64, mean_anomaly_deg: f64) -> Result<KeplerSolution, OrbitError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::EccentricityOutOfRange {
                body: String::from("<unnamed>"),
                eccentricity,
            });
        }
        if !mean_anomaly_deg.is_finite() {
            return Err(OrbitError::NonFiniteAngle(mean_anomaly_deg));
        }

        // Fraction of a turn, reduced to [0, 2π)
        let turns = mean_anomaly_deg / 360.0;
        let m = TAU * (turns - turns.floor());

        let mut e_anomaly = if eccentricity < HIGH_ECCENTRICITY_SEED { m } else { PI };
        let mut residual = e_anomaly - eccentricity * e_anomaly.sin() - m;
        let mut iterations = 0;

        while residual.abs() > self.tolerance && iterations < self.max_iterations {
            e_anomaly -= residual / (1.0 - eccentricity * e_anomaly.cos());
            residual = e_anomaly - eccentricity * e_anomaly.sin() - m;
            iterations += 1;
        }

        let degrees = (to_degrees(e_anomaly) * ROUNDING_SCALE).round() / ROUNDING_SCALE;

        Ok(KeplerSolution {
            eccentric_anomaly: degrees,
            iterations,
            residual: residual.abs(),
            converged: residual.abs() <= self.tolerance,
        })
    }
}
