//! In-memory product catalogue with a REST facade.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;

pub use config::TronicsConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::{KeyPolicy, Product, ProductId, Registry};
