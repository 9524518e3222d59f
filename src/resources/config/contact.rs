use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::deg_to_rad;

/// Thresholds for touchdown, rollout and takeoff.
///
/// Defaults are tuned for a light single engine aircraft on a paved runway.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundContactConfig {
    /// Sink rate above which a touchdown is a crash (m/s).
    pub max_sink_rate: f64,
    /// Airspeed above which a touchdown is a crash (m/s).
    pub max_touchdown_airspeed: f64,
    /// Bank angle magnitude above which a touchdown is a crash (rad).
    pub max_bank_angle: f64,
    /// Horizontal velocity kept on a safe touchdown.
    pub touchdown_speed_factor: f64,
    /// Horizontal velocity kept per tick while rolling.
    pub rolling_friction_factor: f64,
    /// Throttle needed to leave the ground.
    pub takeoff_throttle: f64,
    /// Ground speed needed to leave the ground (m/s).
    pub takeoff_ground_speed: f64,
    /// Altitude the aircraft is lifted to on takeoff (m).
    pub liftoff_altitude: f64,
}

impl Default for GroundContactConfig {
    fn default() -> Self {
        Self {
            max_sink_rate: 5.0,
            max_touchdown_airspeed: 60.0,
            max_bank_angle: deg_to_rad(45.0),
            touchdown_speed_factor: 0.7,
            rolling_friction_factor: 0.995,
            takeoff_throttle: 0.6,
            takeoff_ground_speed: 10.0,
            liftoff_altitude: 0.1,
        }
    }
}
