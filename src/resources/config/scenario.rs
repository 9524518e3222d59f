use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{
    AircraftSource, AircraftState, Attitude, ConfigError, ContactState, ControlInput,
};
use crate::resources::{EnvironmentConfig, GroundContactConfig, PhysicsConfig};

/// Where and how the aircraft starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialStateConfig {
    /// NED position (m).
    pub position: Vector3<f64>,
    /// World-frame velocity (m/s).
    pub velocity: Vector3<f64>,
    /// Roll, pitch, yaw (rad).
    pub attitude: Attitude,
    pub throttle: f64,
    pub on_ground: bool,
}

impl Default for InitialStateConfig {
    fn default() -> Self {
        let state = AircraftState::default();
        Self {
            position: state.position,
            velocity: state.velocity,
            attitude: state.attitude,
            throttle: state.controls.throttle(),
            on_ground: false,
        }
    }
}

impl InitialStateConfig {
    pub fn to_state(&self) -> AircraftState {
        let mut state = AircraftState::airborne(self.position, self.velocity)
            .with_attitude(self.attitude)
            .with_throttle(self.throttle);
        if self.on_ground {
            state.contact = ContactState::OnGround;
        }
        state
    }
}

/// A scripted headless run: one aircraft, a fixed environment and a constant
/// control input held for `ticks` steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub aircraft: AircraftSource,
    pub initial_state: InitialStateConfig,
    pub environment: EnvironmentConfig,
    pub physics: PhysicsConfig,
    pub contact: GroundContactConfig,
    pub controls: ControlInput,
    pub ticks: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            aircraft: AircraftSource::default(),
            initial_state: InitialStateConfig::default(),
            environment: EnvironmentConfig::default(),
            physics: PhysicsConfig::default(),
            contact: GroundContactConfig::default(),
            controls: ControlInput::default(),
            ticks: 600,
        }
    }
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let scenario: ScenarioConfig = serde_yaml::from_str(contents)?;
        scenario.physics.validate()?;
        Ok(scenario)
    }
}
