use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{MS_TO_KNOTS, SEA_LEVEL_DENSITY};

/// Represents aerodynamic data for the aircraft, refreshed every tick by the
/// force calculation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed of the aircraft (m/s).
    pub true_airspeed: f64,
    /// Angle of attack (α) in radians.
    pub alpha: f64,
    /// Sideslip angle (β) in radians.
    pub beta: f64,
    /// Dynamic pressure acting on the aircraft (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Air-relative velocity in the body frame (m/s).
    pub relative_velocity: Vector3<f64>,
    /// Wind velocity vector, world frame (m/s).
    pub wind_velocity: Vector3<f64>,
    /// |α| beyond the stall angle.
    pub stalled: bool,
}

impl Default for AirData {
    /// Provides a default state for zero airspeed and no wind.
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            dynamic_pressure: 0.0,
            density: SEA_LEVEL_DENSITY,
            relative_velocity: Vector3::zeros(),
            wind_velocity: Vector3::zeros(),
            stalled: false,
        }
    }
}

impl AirData {
    pub fn airspeed_knots(&self) -> f64 {
        self.true_airspeed * MS_TO_KNOTS
    }
}
