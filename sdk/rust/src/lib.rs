//! Typed client for the tronics product API.

mod client;

pub use client::{ClientError, Product, ProductClient};
