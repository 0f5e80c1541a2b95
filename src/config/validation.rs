//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TronicsConfig → Result<(), Vec<InvalidSetting>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::TronicsConfig;

/// A single rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct InvalidSetting {
    pub field: &'static str,
    pub reason: String,
}

impl InvalidSetting {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Check semantic constraints serde cannot express.
pub fn validate_config(config: &TronicsConfig) -> Result<(), Vec<InvalidSetting>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(InvalidSetting::new("listener.port", "must be non-zero"));
    }
    if config.listener.host.trim().is_empty() {
        errors.push(InvalidSetting::new("listener.host", "must not be empty"));
    }
    if config.registry.min_name_len == 0 {
        errors.push(InvalidSetting::new("registry.min_name_len", "must be at least 1"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(InvalidSetting::new("timeouts.request_secs", "must be greater than 0"));
    }
    if config.security.max_body_size == 0 {
        errors.push(InvalidSetting::new("security.max_body_size", "must be greater than 0"));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(InvalidSetting::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
