pub mod aircraft;
pub mod controls;
pub mod physics;
pub mod trail;

pub use aircraft::{
    AeroCoefficients, AirData, AircraftControls, AircraftGeometry, AircraftParameters,
    AircraftSource, AircraftState, AircraftType, Attitude, ConfigError, ContactState,
    ControlEffectiveness, MassModel, PropulsionModel, RawAircraftConfig,
};
pub use controls::{ControlInput, ThrottleCommand};
pub use physics::PhysicsComponent;
pub use trail::{AircraftSnapshot, FlightTrail};

use bevy::prelude::*;

/// Everything an aircraft entity needs to take part in the fixed tick.
#[derive(Bundle)]
pub struct AircraftBundle {
    pub parameters: AircraftParameters,
    pub state: AircraftState,
    pub input: ControlInput,
    pub air_data: AirData,
    pub physics: PhysicsComponent,
    pub trail: FlightTrail,
    pub name: Name,
}

impl AircraftBundle {
    pub fn new(parameters: AircraftParameters, state: AircraftState, trail_capacity: usize) -> Self {
        let name = Name::new(parameters.name.clone());
        Self {
            parameters,
            state,
            input: ControlInput::neutral(),
            air_data: AirData::default(),
            physics: PhysicsComponent::default(),
            trail: FlightTrail::with_capacity(trail_capacity),
            name,
        }
    }
}
