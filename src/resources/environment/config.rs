use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// How the wind is chosen at start-up. Both variants give a wind that stays
/// constant for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindConfig {
    Constant {
        velocity: Vector3<f64>,
    },
    /// Uniformly drawn north and east components in `[-max, max]`.
    /// A missing seed draws from entropy.
    RandomConstant {
        max_north: f64,
        max_east: f64,
        seed: Option<u64>,
    },
}

impl Default for WindConfig {
    fn default() -> Self {
        WindConfig::Constant {
            velocity: Vector3::zeros(),
        }
    }
}

impl WindConfig {
    /// Light gusty day: up to 2 m/s north and 1 m/s east.
    pub fn light_random(seed: Option<u64>) -> Self {
        WindConfig::RandomConstant {
            max_north: 2.0,
            max_east: 1.0,
            seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub wind: WindConfig,
    /// Air density (kg/m³). Unset falls back to the aircraft's reference density.
    pub air_density: Option<f64>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            wind: WindConfig::default(),
            air_density: None,
        }
    }
}
