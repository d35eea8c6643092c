//! Analytic ephemeris building blocks.
//!
//! Leaves first: angle helpers, the Kepler solver, element evolution, the
//! Cartesian projection, and the built-in element tables.
//!
//! Coordinate frame:
//! - 3D heliocentric (Sun at origin), J2000 ecliptic, AU times a display scale.

pub mod angle;
pub mod data;
pub mod elements;
pub mod kepler;
pub mod projection;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{PlanetId, long_span_planets, standard_planets};
pub use elements::{DerivedElements, ElementSet, MeanAnomalyTerms, OrbitalElements, centuries_since};
pub use kepler::{KeplerSolution, KeplerSolver};
pub use projection::project;
