mod clock;
mod config;
mod environment;

pub use clock::SimulationClock;
pub use config::{GroundContactConfig, InitialStateConfig, PhysicsConfig, ScenarioConfig};
pub use environment::{Environment, EnvironmentConfig, WindConfig};
