pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

/// Default fixed physics step (60 Hz)
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

/// Throttle change per second while a throttle key is held
pub const THROTTLE_RATE: f64 = 0.6;

pub const MS_TO_KNOTS: f64 = 1.94384;

// Numerical guards
pub const MIN_FORWARD_SPEED: f64 = 1e-6; // m/s, floor on body-x airspeed for alpha/beta
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6; // m/s, below this the flow direction is undefined
pub const MIN_DIRECTION_LENGTH: f64 = 1e-6;
pub const MIN_COS_PITCH: f64 = 1e-3; // Euler kinematics singularity guard
