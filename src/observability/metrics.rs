//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tronics_requests_total` (counter): requests by method, status
//! - `tronics_request_duration_seconds` (histogram): latency distribution
//! - `tronics_registry_size` (gauge): live products in the registry

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    ::metrics::counter!(
        "tronics_requests_total",
        "method" => method.to_string(),
        "status" => status
    )
    .increment(1);
    ::metrics::histogram!("tronics_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record the number of live products.
pub fn record_registry_size(size: usize) {
    ::metrics::gauge!("tronics_registry_size").set(size as f64);
}

/// Middleware recording count and latency of every request.
pub async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
