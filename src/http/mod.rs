//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned, trace span opened)
//!     → products.rs (decode, parse id, call registry under the lock)
//!     → error.rs (RegistryError / decode failures → status + JSON message)
//!     → Send to client
//! ```

pub mod error;
pub mod products;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use products::ProductRequest;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
