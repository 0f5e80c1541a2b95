//! Product registry subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → AppState lock (single RwLock around the registry)
//!     → store.rs (list/get/create/update/delete)
//!     → validation.rs (name checks on create/update)
//! ```
//!
//! # Design Decisions
//! - Entries kept in a Vec to preserve insertion order
//! - Key assignment is a configurable [`KeyPolicy`]
//! - No persistence: contents live for the process lifetime

pub mod store;
pub mod types;
pub mod validation;

pub use store::{Registry, RegistryError, RegistryResult};
pub use types::{KeyPolicy, Product, ProductId};
pub use validation::{MinLengthValidator, ValidationError, Validator};
