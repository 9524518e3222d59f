use serde::Deserialize;
use thiserror::Error;

use crate::components::aircraft::config::{
    AeroCoefficients, AircraftGeometry, ControlEffectiveness, MassModel, PropulsionModel,
};
use crate::utils::{deg_to_rad, GRAVITY, SEA_LEVEL_DENSITY};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk layout of an aircraft file.
///
/// Angles are given in degrees. Everything below the thrust entry has a
/// default so short files only need the physical description.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,

    /// Lift and drag polar
    pub c_L_0: f64,
    pub c_L_alpha: f64,
    pub c_D_0: f64,
    pub k_induced: f64,
    pub alpha_stall_deg: f64,
    pub stall_width_deg: f64,

    /// Propulsion
    pub max_thrust: f64,
    #[serde(default = "default_brake_thrust_fraction")]
    pub brake_thrust_fraction: f64,

    /// Control effectiveness
    #[serde(default = "default_aileron_effect")]
    pub aileron_effect: f64,
    #[serde(default = "default_elevator_effect")]
    pub elevator_effect: f64,
    #[serde(default = "default_rudder_effect")]
    pub rudder_effect: f64,
    #[serde(default = "default_roll_scale")]
    pub roll_moment_scale: f64,
    #[serde(default = "default_pitch_scale")]
    pub pitch_moment_scale: f64,
    #[serde(default = "default_yaw_scale")]
    pub yaw_moment_scale: f64,
    #[serde(default = "default_rate_damping")]
    pub rate_damping: f64,

    /// Environment and limits
    #[serde(default = "default_air_density")]
    pub air_density: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    #[serde(default)]
    pub x_cg: f64,
    #[serde(default = "default_x_ac")]
    pub x_ac: f64,
}

impl RawAircraftConfig {
    pub fn mass_model(&self) -> MassModel {
        MassModel::new(self.mass, self.ixx, self.iyy, self.izz)
    }

    pub fn geometry(&self) -> AircraftGeometry {
        AircraftGeometry::new(self.wing_area, self.wing_span)
    }

    pub fn aero_coefficients(&self) -> AeroCoefficients {
        AeroCoefficients {
            c_l_0: self.c_L_0,
            c_l_alpha: self.c_L_alpha,
            c_d_0: self.c_D_0,
            k_induced: self.k_induced,
            alpha_stall: deg_to_rad(self.alpha_stall_deg),
            stall_width: deg_to_rad(self.stall_width_deg),
        }
    }

    pub fn control_effectiveness(&self) -> ControlEffectiveness {
        ControlEffectiveness {
            aileron: self.aileron_effect,
            elevator: self.elevator_effect,
            rudder: self.rudder_effect,
            roll_scale: self.roll_moment_scale,
            pitch_scale: self.pitch_moment_scale,
            yaw_scale: self.yaw_moment_scale,
            rate_damping: self.rate_damping,
        }
    }

    pub fn propulsion(&self) -> PropulsionModel {
        PropulsionModel {
            max_thrust: self.max_thrust,
            brake_thrust_fraction: self.brake_thrust_fraction,
        }
    }
}

fn default_brake_thrust_fraction() -> f64 {
    PropulsionModel::light_ga().brake_thrust_fraction
}

fn default_aileron_effect() -> f64 {
    ControlEffectiveness::light_ga().aileron
}

fn default_elevator_effect() -> f64 {
    ControlEffectiveness::light_ga().elevator
}

fn default_rudder_effect() -> f64 {
    ControlEffectiveness::light_ga().rudder
}

fn default_roll_scale() -> f64 {
    ControlEffectiveness::light_ga().roll_scale
}

fn default_pitch_scale() -> f64 {
    ControlEffectiveness::light_ga().pitch_scale
}

fn default_yaw_scale() -> f64 {
    ControlEffectiveness::light_ga().yaw_scale
}

fn default_rate_damping() -> f64 {
    ControlEffectiveness::light_ga().rate_damping
}

fn default_air_density() -> f64 {
    SEA_LEVEL_DENSITY
}

fn default_gravity() -> f64 {
    GRAVITY
}

fn default_max_speed() -> f64 {
    120.0
}

fn default_x_ac() -> f64 {
    0.1
}
