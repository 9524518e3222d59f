mod contact;
mod physics;
mod scenario;

pub use contact::GroundContactConfig;
pub use physics::PhysicsConfig;
pub use scenario::{InitialStateConfig, ScenarioConfig};
