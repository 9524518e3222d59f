use bevy::prelude::*;

use crate::components::{AircraftState, ControlInput};
use crate::resources::PhysicsConfig;

/// Copies this tick's pilot input into the aircraft controls.
///
/// Throttle commands are integrated over the timestep; surfaces are replaced.
pub fn apply_control_input_system(
    mut query: Query<(&ControlInput, &mut AircraftState)>,
    config: Res<PhysicsConfig>,
) {
    for (input, mut state) in query.iter_mut() {
        state.controls.apply(input, config.timestep);
    }
}

/// Returns every input to neutral once the tick has consumed it.
pub fn reset_control_input_system(mut query: Query<&mut ControlInput>) {
    for mut input in query.iter_mut() {
        if *input != ControlInput::neutral() {
            *input = ControlInput::neutral();
        }
    }
}
