use bevy::prelude::*;

use crate::components::ConfigError;
use crate::resources::{Environment, EnvironmentConfig};

/// Inserts the [`Environment`] resource. Random winds are drawn once, here.
pub struct EnvironmentPlugin {
    environment: Environment,
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
        }
    }
}

impl EnvironmentPlugin {
    /// `reference_density` fills in an unset density, see [`Environment::from_config`].
    pub fn with_config(
        config: &EnvironmentConfig,
        reference_density: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_config(config, reference_density)?,
        })
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self { environment }
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Wind {:.2} m/s N, {:.2} m/s E, density {:.3} kg/m³",
            self.environment.wind.x, self.environment.wind.y, self.environment.air_density
        );
        app.insert_resource(self.environment);
    }
}
