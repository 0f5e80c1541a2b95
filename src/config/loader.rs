//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::TronicsConfig;
use crate::config::validation::{validate_config, InvalidSetting};

/// Environment variable overriding `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}'")]
    Port(String),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<InvalidSetting>),
}

fn join(errors: &[InvalidSetting]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<TronicsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: TronicsConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration.
///
/// Starts from the file at `path` (or defaults), then applies `port` when
/// given, and validates the result.
pub fn resolve_config(path: Option<&Path>, port: Option<&str>) -> Result<TronicsConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => TronicsConfig::default(),
    };

    if let Some(raw) = port {
        config.listener.port = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Port(raw.to_string()))?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
