use std::io;
use thiserror::Error;

use crate::components::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No telemetry recorded for aircraft: {0}")]
    NoTelemetry(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
