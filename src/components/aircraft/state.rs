use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::ControlInput;
use crate::utils::{body_to_world, horizontal_speed, wrap_angle};

/// Euler angles (radians), each kept in [-pi, pi].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    /// Roll angle φ.
    pub roll: f64,
    /// Pitch angle θ.
    pub pitch: f64,
    /// Yaw angle ψ.
    pub yaw: f64,
}

impl Attitude {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }.wrapped()
    }

    /// Copy of `self` with every angle wrapped to [-pi, pi].
    pub fn wrapped(self) -> Self {
        Self {
            roll: wrap_angle(self.roll),
            pitch: wrap_angle(self.pitch),
            yaw: wrap_angle(self.yaw),
        }
    }

    /// Rotation from body to world frame.
    pub fn body_to_world(&self) -> Matrix3<f64> {
        body_to_world(self.roll, self.pitch, self.yaw)
    }

    pub fn is_wrapped(&self) -> bool {
        use std::f64::consts::PI;
        [self.roll, self.pitch, self.yaw]
            .iter()
            .all(|a| (-PI..=PI).contains(a))
    }
}

/// Whether the wheels are on the runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ContactState {
    #[default]
    Airborne,
    OnGround,
}

/// Normalized pilot controls held by the aircraft.
///
/// Throttle persists between ticks. The surfaces are overwritten every tick
/// from the latest [`ControlInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftControls {
    /// Throttle setting in [0, 1].
    throttle: f64,
    /// Elevator in [-1, 1], positive pulls the nose up.
    pub elevator: f64,
    /// Aileron in [-1, 1], positive rolls right.
    pub aileron: f64,
    /// Rudder in [-1, 1], positive yaws right.
    pub rudder: f64,
}

impl Default for AircraftControls {
    fn default() -> Self {
        Self {
            throttle: 0.5,
            elevator: 0.0,
            aileron: 0.0,
            rudder: 0.0,
        }
    }
}

impl AircraftControls {
    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    /// Sets the throttle, clamped to [0, 1]. NaN is treated as idle.
    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = if throttle.is_nan() {
            0.0
        } else {
            throttle.clamp(0.0, 1.0)
        };
    }

    /// Applies one tick of pilot input.
    ///
    /// `dt` scales throttle rate commands; surfaces are replaced (clamped to
    /// [-1, 1]) rather than accumulated.
    pub fn apply(&mut self, input: &ControlInput, dt: f64) {
        if let Some(throttle) = input.throttle.resolve(self.throttle, dt) {
            self.set_throttle(throttle);
        }
        self.elevator = clamp_surface(input.elevator);
        self.aileron = clamp_surface(input.aileron);
        self.rudder = clamp_surface(input.rudder);
    }
}

fn clamp_surface(deflection: f64) -> f64 {
    if deflection.is_nan() {
        0.0
    } else {
        deflection.clamp(-1.0, 1.0)
    }
}

/// Complete dynamic state of one simulated aircraft.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position in NED world frame (m), z positive down.
    pub position: Vector3<f64>,
    /// Velocity in NED world frame (m/s).
    pub velocity: Vector3<f64>,
    /// Euler attitude.
    pub attitude: Attitude,
    /// Body rates (p, q, r) in rad/s.
    pub body_rates: Vector3<f64>,
    pub controls: AircraftControls,
    pub contact: ContactState,
    /// Set on the first safe touchdown and never cleared.
    pub landed: bool,
    /// Terminal. Once set, only free-fall integration runs.
    pub crashed: bool,
}

impl Default for AircraftState {
    /// 100 m above the runway, flying north at 40 m/s with a slight nose-up
    /// attitude and half throttle.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -100.0),
            velocity: Vector3::new(40.0, 0.0, 0.0),
            attitude: Attitude::new(0.0, 0.05, 0.0),
            body_rates: Vector3::zeros(),
            controls: AircraftControls::default(),
            contact: ContactState::Airborne,
            landed: false,
            crashed: false,
        }
    }
}

impl AircraftState {
    /// Airborne state at the given NED position and world velocity, level
    /// attitude, half throttle.
    pub fn airborne(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            attitude: Attitude::default(),
            ..Default::default()
        }
    }

    /// Stationary on the runway at the origin.
    pub fn on_runway() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Attitude::default(),
            contact: ContactState::OnGround,
            ..Default::default()
        }
    }

    /// Height above the ground plane (m).
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.position.z = -altitude;
    }

    /// Positive when descending (m/s).
    pub fn sink_rate(&self) -> f64 {
        self.velocity.z
    }

    pub fn ground_speed(&self) -> f64 {
        horizontal_speed(&self.velocity)
    }

    pub fn is_on_ground(&self) -> bool {
        self.contact == ContactState::OnGround
    }

    /// Overwrites the throttle directly, clamped to [0, 1].
    pub fn set_throttle(&mut self, throttle: f64) {
        self.controls.set_throttle(throttle);
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.set_throttle(throttle);
        self
    }

    pub fn with_attitude(mut self, attitude: Attitude) -> Self {
        self.attitude = attitude.wrapped();
        self
    }
}
