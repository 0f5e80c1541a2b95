//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::registry::validation::DEFAULT_MIN_NAME_LEN;
use crate::registry::KeyPolicy;

/// Root configuration for the product service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TronicsConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Product registry settings.
    pub registry: RegistryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host or IP to bind.
    pub host: String,

    /// TCP port. Overridden by the `PORT` environment variable.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Product registry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Key assignment policy for new products.
    pub key_policy: KeyPolicy,

    /// Minimum product name length accepted on create/update.
    pub min_name_len: usize,

    /// Product names loaded at startup, keyed 1..=n.
    pub seed: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            key_policy: KeyPolicy::default(),
            min_name_len: DEFAULT_MIN_NAME_LEN,
            seed: Vec::new(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: TronicsConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.registry.key_policy, KeyPolicy::Monotonic);
        assert_eq!(config.registry.min_name_len, 4);
        assert!(config.registry.seed.is_empty());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config: TronicsConfig = toml::from_str(
            r#"
            [listener]
            port = 1323

            [registry]
            key_policy = "entry_count"
            seed = ["mobiles", "tv", "laptops"]
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.host, "127.0.0.1");
        assert_eq!(config.listener.port, 1323);
        assert_eq!(config.registry.key_policy, KeyPolicy::EntryCount);
        assert_eq!(config.registry.seed.len(), 3);
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
