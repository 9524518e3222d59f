use bevy::prelude::*;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::{EnvironmentConfig, WindConfig};
use crate::components::ConfigError;
use crate::utils::SEA_LEVEL_DENSITY;

/// Atmosphere seen by the force calculation. Read-only during a tick; swap
/// the resource between ticks to change the weather.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Wind velocity, world NED frame (m/s).
    pub wind: Vector3<f64>,
    /// Air density (kg/m³).
    pub air_density: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self::still_air(SEA_LEVEL_DENSITY)
    }
}

impl Environment {
    pub fn still_air(air_density: f64) -> Self {
        Self {
            wind: Vector3::zeros(),
            air_density,
        }
    }

    pub fn with_wind(mut self, wind: Vector3<f64>) -> Self {
        self.wind = wind;
        self
    }

    /// Builds the environment, drawing the wind if it is random.
    ///
    /// `reference_density` is used when the config leaves the density unset,
    /// normally the aircraft's own `air_density`.
    pub fn from_config(
        config: &EnvironmentConfig,
        reference_density: f64,
    ) -> Result<Self, ConfigError> {
        let air_density = config.air_density.unwrap_or(reference_density);
        if !(air_density.is_finite() && air_density > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "air_density must be positive, got {}",
                air_density
            )));
        }

        let wind = match &config.wind {
            WindConfig::Constant { velocity } => *velocity,
            WindConfig::RandomConstant {
                max_north,
                max_east,
                seed,
            } => {
                for (label, bound) in [("max_north", max_north), ("max_east", max_east)] {
                    if !(bound.is_finite() && *bound >= 0.0) {
                        return Err(ConfigError::ValidationError(format!(
                            "{} must be non-negative, got {}",
                            label, bound
                        )));
                    }
                }
                let mut rng = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                Vector3::new(
                    rng.gen_range(-max_north..=*max_north),
                    rng.gen_range(-max_east..=*max_east),
                    0.0,
                )
            }
        };

        Ok(Self { wind, air_density })
    }

    /// Wind at a NED position. The field is uniform, so the position is unused.
    pub fn wind_at(&self, _position: &Vector3<f64>) -> Vector3<f64> {
        self.wind
    }

    pub fn density_at(&self, _position: &Vector3<f64>) -> f64 {
        self.air_density
    }
}
