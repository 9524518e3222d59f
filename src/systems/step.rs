use crate::components::{AirData, AircraftParameters, AircraftState, ConfigError, ControlInput};
use crate::resources::{Environment, GroundContactConfig, PhysicsConfig};
use crate::systems::aerodynamics::{assemble_forces_moments, calculate_air_data, ForcesAndMoments};
use crate::systems::contact::{resolve_ground_contact, ContactTransition};
use crate::systems::physics::{integrate_free_fall, integrate_state};

/// What happened during one call to [`FlightModel::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub air_data: AirData,
    /// `None` once crashed, when no forces are computed.
    pub forces: Option<ForcesAndMoments>,
    pub transition: Option<ContactTransition>,
}

/// The per-tick pipeline without an ECS world: apply input, assemble
/// forces, integrate, resolve ground contact.
///
/// The bevy systems run the same stages; this is for callers that own a
/// single `AircraftState` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightModel {
    parameters: AircraftParameters,
    contact: GroundContactConfig,
    timestep: f64,
}

impl FlightModel {
    pub fn new(
        parameters: AircraftParameters,
        contact: GroundContactConfig,
        physics: &PhysicsConfig,
    ) -> Result<Self, ConfigError> {
        parameters.validate()?;
        physics.validate()?;
        Ok(Self {
            parameters,
            contact,
            timestep: physics.timestep,
        })
    }

    pub fn parameters(&self) -> &AircraftParameters {
        &self.parameters
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    pub fn step(
        &self,
        state: &mut AircraftState,
        input: &ControlInput,
        environment: &Environment,
    ) -> TickReport {
        let dt = self.timestep;
        state.controls.apply(input, dt);

        if state.crashed {
            let air_data = calculate_air_data(state, &self.parameters, environment);
            integrate_free_fall(state, self.parameters.gravity, dt);
            return TickReport {
                air_data,
                forces: None,
                transition: None,
            };
        }

        let forces = assemble_forces_moments(state, &self.parameters, environment, input.brake, dt);
        integrate_state(state, &self.parameters, &forces.force, &forces.moment, dt);
        let transition =
            resolve_ground_contact(state, forces.air_data.true_airspeed, &self.contact);

        TickReport {
            air_data: forces.air_data,
            forces: Some(forces),
            transition,
        }
    }
}
