//! Tick scheduling for Bevy hosts.
//!
//! Each frame advances the active provider by one tick unless paused. The
//! plugin never reads wall-clock time: tick size alone decides how far
//! simulated time moves per frame.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::PropagatorConfig;
use crate::ephemeris::{OrbitalElements, standard_planets};
use crate::provider::{PositionProvider, Propagation};

/// Plugin that builds a provider from its configuration and ticks it every `Update`.
pub struct OrreryPlugin {
    pub config: PropagatorConfig,
    pub bodies: Vec<OrbitalElements>,
}

impl Default for OrreryPlugin {
    fn default() -> Self {
        Self {
            config: PropagatorConfig::default(),
            bodies: standard_planets(),
        }
    }
}

/// The provider advanced by [`OrreryPlugin`].
#[derive(Resource, Debug)]
pub struct ActiveProvider(pub Propagation);

/// Positions produced by the most recent tick, one per body in table order.
#[derive(Resource, Debug, Default)]
pub struct BodyPositions(pub Vec<DVec3>);

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<BodyPositions>();

        match Propagation::from_config(self.bodies.clone(), self.config.clone()) {
            Ok(provider) => {
                app.insert_resource(ActiveProvider(provider));
            }
            Err(err) => {
                error!("Orbit propagation disabled: {}", err);
            }
        }

        app.add_systems(Update, advance_orbits.run_if(resource_exists::<ActiveProvider>));
    }
}

/// Advance the active provider by one tick.
///
/// A failed tick pauses the clock so the last good positions stay on screen.
fn advance_orbits(mut provider: ResMut<ActiveProvider>, mut positions: ResMut<BodyPositions>) {
    if provider.0.clock().paused {
        return;
    }

    match provider.0.tick() {
        Ok(latest) => positions.0 = latest,
        Err(err) => {
            warn!("Orbit tick at JD {} failed: {}; pausing", provider.0.clock().current(), err);
            provider.0.clock_mut().paused = true;
        }
    }
}
