//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply PORT override)
//!     → validation.rs (semantic checks)
//!     → TronicsConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, PORT_ENV};
pub use schema::{
    ListenerConfig, ObservabilityConfig, RegistryConfig, SecurityConfig, TimeoutConfig,
    TronicsConfig,
};
