//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and registry produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows into the trace span of every request
//! - Metrics are recorded through the `metrics` facade; without an
//!   installed recorder they are no-ops

pub mod logging;
pub mod metrics;
