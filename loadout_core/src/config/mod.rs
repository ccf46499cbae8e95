//! Configuration loading from TOML files

mod catalog;
mod constants;

pub use catalog::{default_catalog, load_catalog, parse_catalog, parse_catalog_json};
pub use constants::{
    EngineConfig, LevelConstants, ScoringConstants, SearchConstants, SimulationConstants,
    TargetConstants,
};

use crate::error::BuildError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    /// The file parsed but its records are not a valid catalog
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] BuildError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
