use bevy::prelude::*;

use crate::components::{AircraftBundle, AircraftParameters, AircraftState};
use crate::resources::PhysicsConfig;

/// Spawns one aircraft at startup.
pub struct AircraftPlugin {
    parameters: AircraftParameters,
    initial_state: AircraftState,
}

impl Default for AircraftPlugin {
    fn default() -> Self {
        Self::new(AircraftParameters::light_ga(), AircraftState::default())
    }
}

impl AircraftPlugin {
    pub fn new(parameters: AircraftParameters, initial_state: AircraftState) -> Self {
        Self {
            parameters,
            initial_state,
        }
    }

    fn spawn_aircraft(
        mut commands: Commands,
        parameters: AircraftParameters,
        state: AircraftState,
        physics: Option<Res<PhysicsConfig>>,
    ) {
        if let Err(e) = parameters.validate() {
            error!("Not spawning aircraft '{}': {}", parameters.name, e);
            return;
        }

        let trail_capacity = physics
            .map(|config| config.trail_capacity)
            .unwrap_or_else(|| PhysicsConfig::default().trail_capacity);

        info!(
            "Spawning {} at {:.1} m altitude, {:.1} m/s",
            parameters.name,
            state.altitude(),
            state.velocity.norm()
        );
        commands.spawn(AircraftBundle::new(parameters, state, trail_capacity));
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let parameters = self.parameters.clone();
        let state = self.initial_state.clone();
        app.add_systems(
            Startup,
            move |commands: Commands, physics: Option<Res<PhysicsConfig>>| {
                Self::spawn_aircraft(commands, parameters.clone(), state.clone(), physics)
            },
        );
    }
}
