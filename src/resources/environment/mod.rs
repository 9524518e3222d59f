mod config;
mod environment;

pub use config::{EnvironmentConfig, WindConfig};
pub use environment::Environment;
