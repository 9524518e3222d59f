use bevy::prelude::*;

use crate::components::ConfigError;
use crate::resources::{GroundContactConfig, PhysicsConfig, SimulationClock};
use crate::systems::{
    advance_clock_system, apply_control_input_system, force_calculator_system,
    ground_contact_system, physics_integrator_system, record_trail_system,
    reset_control_input_system, GroundContactEvent,
};

/// Stages of one fixed tick, run strictly in this order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Forces,
    Integration,
    Contact,
    Telemetry,
}

/// Fixed-timestep flight dynamics: input, forces, integration, ground
/// contact and telemetry, chained in `FixedUpdate`.
pub struct FlightModelPlugin {
    physics: PhysicsConfig,
    contact: GroundContactConfig,
}

impl Default for FlightModelPlugin {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            contact: GroundContactConfig::default(),
        }
    }
}

impl FlightModelPlugin {
    pub fn new(physics: PhysicsConfig, contact: GroundContactConfig) -> Result<Self, ConfigError> {
        physics.validate()?;
        Ok(Self { physics, contact })
    }

    pub fn with_physics(physics: PhysicsConfig) -> Result<Self, ConfigError> {
        Self::new(physics, GroundContactConfig::default())
    }
}

impl Plugin for FlightModelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep))
            .insert_resource(self.physics.clone())
            .insert_resource(self.contact.clone())
            .init_resource::<SimulationClock>()
            .add_event::<GroundContactEvent>();

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Input,
                FlightSet::Forces,
                FlightSet::Integration,
                FlightSet::Contact,
                FlightSet::Telemetry,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                apply_control_input_system.in_set(FlightSet::Input),
                force_calculator_system.in_set(FlightSet::Forces),
                physics_integrator_system.in_set(FlightSet::Integration),
                ground_contact_system.in_set(FlightSet::Contact),
                (
                    advance_clock_system,
                    record_trail_system,
                    reset_control_input_system,
                )
                    .chain()
                    .in_set(FlightSet::Telemetry),
            ),
        );
    }
}
