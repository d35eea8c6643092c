//! Orrery - Solar System Orbit Propagation
//!
//! Heliocentric planet positions from Keplerian elements with secular
//! rates, an optional direct N-body mode, bounded trails for rendering,
//! and a Bevy plugin that ticks the selected provider.

pub mod config;
pub mod ephemeris;
pub mod error;
pub mod physics;
pub mod propagator;
pub mod provider;
pub mod time;
pub mod trail;
pub mod types;

pub use config::{NBodyConfig, PropagationMode, PropagatorConfig};
pub use error::OrbitError;
pub use propagator::{BodyPosition, OrbitPropagator};
pub use provider::{PositionProvider, Propagation};
pub use time::{ActiveProvider, BodyPositions, OrreryPlugin};
pub use trail::TrailBuffer;

#[cfg(test)]
pub mod test_utils;
