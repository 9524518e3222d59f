mod aircraft;
mod environment;
mod flight;

pub use aircraft::AircraftPlugin;
pub use environment::EnvironmentPlugin;
pub use flight::{FlightModelPlugin, FlightSet};
