use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{
    AeroCoefficients, AircraftGeometry, ConfigError, ControlEffectiveness, MassModel,
    PropulsionModel, RawAircraftConfig,
};
use crate::utils::{GRAVITY, SEA_LEVEL_DENSITY};

/// Immutable description of one aircraft: mass, geometry, aerodynamic polar,
/// control gains and propulsion.
///
/// Always build it through [`AircraftParameters::new`] (or one of the
/// presets) so the physical invariants are checked once, up front.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftParameters {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Mass model of the aircraft, including principal inertias.
    pub mass: MassModel,
    /// Wing area and span.
    pub geometry: AircraftGeometry,
    /// Lift/drag polar and stall shape.
    pub aero_coef: AeroCoefficients,
    /// Control surface gains and rate damping.
    pub control: ControlEffectiveness,
    /// Engine thrust and brake effect.
    pub propulsion: PropulsionModel,
    /// Reference air density (kg/m³), used when no environment overrides it.
    pub air_density: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Nominal maximum speed (m/s). Informational, not enforced by the integrator.
    pub max_speed: f64,
    /// Centre of gravity station (m).
    pub x_cg: f64,
    /// Aerodynamic centre station (m).
    pub x_ac: f64,
}

impl Default for AircraftParameters {
    /// The light GA configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::light_ga()
    }
}

impl AircraftParameters {
    /// Creates validated aircraft parameters with the default environment
    /// constants and limits.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationError`] if any physical quantity is
    /// out of range (e.g. non-positive mass or wing area).
    pub fn new(
        name: impl Into<String>,
        mass: MassModel,
        geometry: AircraftGeometry,
        aero_coef: AeroCoefficients,
        control: ControlEffectiveness,
        propulsion: PropulsionModel,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            name: name.into(),
            mass,
            geometry,
            aero_coef,
            control,
            propulsion,
            air_density: SEA_LEVEL_DENSITY,
            gravity: GRAVITY,
            max_speed: 120.0,
            x_cg: 0.0,
            x_ac: 0.1,
        };
        params.validate()?;
        Ok(params)
    }

    /// Loads aircraft parameters from a given source.
    ///
    /// # Arguments
    /// * `source` - Either a programmed preset or a YAML file on disk.
    pub fn from_source(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::LightGa => Self::light_ga(),
            AircraftType::Custom(name) => Self {
                name,
                ..Self::light_ga()
            },
        }
    }

    /// Creates aircraft parameters by reading a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    /// Parses and validates aircraft parameters from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawAircraftConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let params = Self {
            name: raw.name.clone(),
            mass: raw.mass_model(),
            geometry: raw.geometry(),
            aero_coef: raw.aero_coefficients(),
            control: raw.control_effectiveness(),
            propulsion: raw.propulsion(),
            air_density: raw.air_density,
            gravity: raw.gravity,
            max_speed: raw.max_speed,
            x_cg: raw.x_cg,
            x_ac: raw.x_ac,
        };
        params.validate()?;
        Ok(params)
    }

    /// A 1200 kg single engine light aircraft.
    pub fn light_ga() -> Self {
        Self {
            name: "LightGA".to_string(),
            mass: MassModel::light_ga(),
            geometry: AircraftGeometry::light_ga(),
            aero_coef: AeroCoefficients::light_ga(),
            control: ControlEffectiveness::light_ga(),
            propulsion: PropulsionModel::light_ga(),
            air_density: SEA_LEVEL_DENSITY,
            gravity: GRAVITY,
            max_speed: 120.0,
            x_cg: 0.0,
            x_ac: 0.1,
        }
    }

    /// Mean chord (m), derived from wing area and span.
    pub fn chord(&self) -> f64 {
        self.geometry.chord()
    }

    /// Weight force magnitude (N).
    pub fn weight(&self) -> f64 {
        self.mass.mass * self.gravity
    }

    /// Checks the physical invariants every flight model relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mass", self.mass.mass),
            ("ixx", self.mass.ixx),
            ("iyy", self.mass.iyy),
            ("izz", self.mass.izz),
            ("wing_area", self.geometry.wing_area),
            ("wing_span", self.geometry.wing_span),
            ("stall_width", self.aero_coef.stall_width),
            ("air_density", self.air_density),
            ("gravity", self.gravity),
            ("max_thrust", self.propulsion.max_thrust),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("brake_thrust_fraction", self.propulsion.brake_thrust_fraction),
            ("alpha_stall", self.aero_coef.alpha_stall),
            ("k_induced", self.aero_coef.k_induced),
            ("rate_damping", self.control.rate_damping),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Source for aircraft configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

impl Default for AircraftSource {
    fn default() -> Self {
        AircraftSource::Programmed(AircraftType::LightGa)
    }
}

/// Enumeration of available aircraft types.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    LightGa,
    Custom(String),
}
