use serde::{Deserialize, Serialize};

/// Gains turning control-surface deflection into body moments.
///
/// Each moment is `gain * deflection * q * S * length * scale`, where the
/// length is the span for roll and yaw and the chord for pitch, minus a
/// linear damping term `rate_damping * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlEffectiveness {
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,
    pub roll_scale: f64,
    pub pitch_scale: f64,
    pub yaw_scale: f64,
    /// Moment per rad/s of body rate opposing rotation (N·m·s).
    pub rate_damping: f64,
}

impl ControlEffectiveness {
    pub fn light_ga() -> Self {
        Self {
            aileron: 1.2,
            elevator: 0.8,
            rudder: 0.6,
            roll_scale: 0.01,
            pitch_scale: 0.02,
            yaw_scale: 0.005,
            rate_damping: 0.5,
        }
    }
}

impl Default for ControlEffectiveness {
    fn default() -> Self {
        Self::light_ga()
    }
}

/// Single engine thrust model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropulsionModel {
    /// Thrust at full throttle (N).
    pub max_thrust: f64,
    /// Fraction of `max_thrust` removed while the brake is held.
    pub brake_thrust_fraction: f64,
}

impl PropulsionModel {
    pub fn light_ga() -> Self {
        Self {
            max_thrust: 20000.0,
            brake_thrust_fraction: 0.8,
        }
    }
}

impl Default for PropulsionModel {
    fn default() -> Self {
        Self::light_ga()
    }
}
