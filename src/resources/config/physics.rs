use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;
use crate::utils::DEFAULT_TIMESTEP;

/// Global settings for the fixed-step physics loop.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed integration step (s).
    pub timestep: f64,
    /// Number of snapshots kept in each aircraft's trail.
    pub trail_capacity: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            trail_capacity: 1000,
        }
    }
}

impl PhysicsConfig {
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "trail_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
