pub mod air_data;
pub mod config;
pub mod state;

pub use air_data::AirData;
pub use config::{
    AeroCoefficients, AircraftGeometry, AircraftParameters, AircraftSource, AircraftType,
    ConfigError, ControlEffectiveness, MassModel, PropulsionModel, RawAircraftConfig,
};
pub use state::{AircraftControls, AircraftState, Attitude, ContactState};
