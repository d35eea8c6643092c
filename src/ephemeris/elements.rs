//! Keplerian element templates and their secular evolution.
//!
//! Each body carries its J2000 element values plus per-century rates. The
//! instantaneous elements are recomputed from scratch for every requested
//! time; the template itself never changes after construction.

use super::angle::{normalize_nonnegative, reduce, to_radians};
use crate::error::OrbitError;
use crate::types::DAYS_PER_JULIAN_CENTURY;

/// The six classical elements in the form the JPL approximate tables use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementSet {
    /// Semi-major axis (AU)
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless)
    pub eccentricity: f64,
    /// Inclination (degrees)
    pub inclination: f64,
    /// Longitude of the ascending node Ω (degrees)
    pub ascending_node: f64,
    /// Longitude of perihelion ϖ (degrees)
    pub perihelion_longitude: f64,
    /// Mean longitude L (degrees)
    pub mean_longitude: f64,
}

impl ElementSet {
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        mean_longitude: f64,
        perihelion_longitude: f64,
        ascending_node: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node,
            perihelion_longitude,
            mean_longitude,
        }
    }
}

/// Extra mean-anomaly terms for the outer planets (JPL Table 2b).
///
/// Correction: `b·T² + c·cos(f·T) + s·sin(f·T)` with `f·T` in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAnomalyTerms {
    pub b: f64,
    pub c: f64,
    pub s: f64,
    pub f: f64,
}

impl MeanAnomalyTerms {
    /// Correction to add to the mean anomaly, in degrees.
    pub fn correction(&self, centuries: f64) -> f64 {
        let ft = to_radians(self.f * centuries);
        self.b * centuries * centuries + self.c * ft.cos() + self.s * ft.sin()
    }
}

/// Orbital element template for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    pub name: String,
    /// Position of this body in the ordered body sequence
    pub index: usize,
    /// Values at the table epoch
    pub base: ElementSet,
    /// Change per Julian century
    pub rates: ElementSet,
    /// Optional outer-planet mean-anomaly terms
    pub terms: Option<MeanAnomalyTerms>,
    /// Mass in solar masses (0 for a massless body); only the N-body mode reads it
    pub mass: f64,
}

/// Instantaneous elements at one time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedElements {
    /// Semi-major axis (AU)
    pub orbit_size: f64,
    pub eccentricity: f64,
    /// Inclination reduced mod 360, sign kept (degrees)
    pub inclination: f64,
    /// Ascending node reduced mod 360, sign kept (degrees)
    pub ascending_node: f64,
    /// Perihelion longitude in [0, 360) (degrees)
    pub perihelion_longitude: f64,
    /// Mean longitude in [0, 360) (degrees)
    pub mean_longitude: f64,
    /// Mean anomaly in [0, 360) (degrees)
    pub mean_anomaly: f64,
}

impl OrbitalElements {
    pub fn new(name: impl Into<String>, index: usize, base: ElementSet, rates: ElementSet) -> Self {
        Self {
            name: name.into(),
            index,
            base,
            rates,
            terms: None,
            mass: 0.0,
        }
    }

    pub fn with_terms(mut self, terms: MeanAnomalyTerms) -> Self {
        self.terms = Some(terms);
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Instantaneous elements `centuries` Julian centuries after the epoch.
    pub fn evolve(&self, centuries: f64) -> DerivedElements {
        let t = centuries;
        let base = &self.base;
        let rates = &self.rates;

        let orbit_size = base.semi_major_axis + rates.semi_major_axis * t;
        let eccentricity = base.eccentricity + rates.eccentricity * t;
        let inclination = reduce(base.inclination + rates.inclination * t);
        let ascending_node = reduce(base.ascending_node + rates.ascending_node * t);

        // ϖ and L must be non-negative before M is derived from them
        let perihelion_longitude =
            normalize_nonnegative(base.perihelion_longitude + rates.perihelion_longitude * t);
        let mean_longitude = normalize_nonnegative(base.mean_longitude + rates.mean_longitude * t);

        let mean_anomaly = normalize_nonnegative(mean_longitude - perihelion_longitude);

        DerivedElements {
            orbit_size,
            eccentricity,
            inclination,
            ascending_node,
            perihelion_longitude,
            mean_longitude,
            mean_anomaly,
        }
    }

    /// Like [`evolve`](Self::evolve), additionally applying the outer-planet
    /// terms when `apply_terms` is set and this body carries them.
    pub fn evolve_with_terms(&self, centuries: f64, apply_terms: bool) -> DerivedElements {
        let mut derived = self.evolve(centuries);
        if let (true, Some(terms)) = (apply_terms, &self.terms) {
            derived.mean_anomaly = normalize_nonnegative(derived.mean_anomaly + terms.correction(centuries));
        }
        derived
    }
}

/// Julian centuries between `time` and `epoch` (both Julian dates).
pub fn centuries_since(time: f64, epoch: f64) -> Result<f64, OrbitError> {
    if !time.is_finite() {
        return Err(OrbitError::NonFiniteTime(time));
    }
    Ok((time - epoch) / DAYS_PER_JULIAN_CENTURY)
}
