use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::THROTTLE_RATE;

/// How the throttle should change this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ThrottleCommand {
    /// Leave the throttle where it is.
    #[default]
    Hold,
    /// Change at this many throttle units per second (negative to reduce).
    Rate(f64),
    /// Jump to this setting.
    Absolute(f64),
}

impl ThrottleCommand {
    /// Throttle-up key held.
    pub fn increase() -> Self {
        ThrottleCommand::Rate(THROTTLE_RATE)
    }

    /// Throttle-down key held.
    pub fn decrease() -> Self {
        ThrottleCommand::Rate(-THROTTLE_RATE)
    }

    /// New unclamped throttle value for this tick, or `None` to hold.
    pub fn resolve(&self, current: f64, dt: f64) -> Option<f64> {
        match *self {
            ThrottleCommand::Hold => None,
            ThrottleCommand::Rate(rate) => Some(current + rate * dt),
            ThrottleCommand::Absolute(value) => Some(value),
        }
    }
}

/// Pilot input for the next tick, written by whatever polls the keyboard,
/// joystick or agent.
///
/// The tick consumes it: once the tick has run the input returns to neutral,
/// so a collaborator that sends nothing gets zero surface deflection and a
/// held throttle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInput {
    pub throttle: ThrottleCommand,
    /// Elevator in [-1, 1], positive pulls the nose up.
    pub elevator: f64,
    /// Aileron in [-1, 1], positive rolls right.
    pub aileron: f64,
    /// Rudder in [-1, 1], positive yaws right.
    pub rudder: f64,
    /// Wheel brake, also cuts thrust.
    pub brake: bool,
}

impl ControlInput {
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn with_throttle(mut self, throttle: ThrottleCommand) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_surfaces(mut self, elevator: f64, aileron: f64, rudder: f64) -> Self {
        self.elevator = elevator;
        self.aileron = aileron;
        self.rudder = rudder;
        self
    }

    pub fn with_brake(mut self, brake: bool) -> Self {
        self.brake = brake;
        self
    }
}
