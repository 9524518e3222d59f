mod aero_coef;
mod aircraft;
mod control;
mod geometry;
mod loader;
mod mass;

pub use aero_coef::AeroCoefficients;
pub use aircraft::{AircraftParameters, AircraftSource, AircraftType};
pub use control::{ControlEffectiveness, PropulsionModel};
pub use geometry::AircraftGeometry;
pub use loader::{ConfigError, RawAircraftConfig};
pub use mass::MassModel;
