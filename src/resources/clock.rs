use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Simulated time, advanced once per fixed tick.
///
/// Independent of bevy's `Time<Fixed>` so that stepping the `FixedUpdate`
/// schedule by hand produces the same timeline as running the app.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationClock {
    pub ticks: u64,
    /// Elapsed simulated time (s).
    pub elapsed: f64,
}

impl SimulationClock {
    pub fn advance(&mut self, dt: f64) {
        self.ticks += 1;
        self.elapsed += dt;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
