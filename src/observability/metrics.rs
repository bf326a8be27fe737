//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define directory metrics (request counts, latency, store size)
//! - Expose a Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `userdir_requests_total` (counter): requests by method, route, status
//! - `userdir_request_duration_seconds` (histogram): latency by method, route
//! - `userdir_users` (gauge): records currently in the store
//!
//! # Design Decisions
//! - Recording is fire-and-forget; without an installed recorder it is a no-op,
//!   so the store and handlers can record unconditionally (tests included)
//! - Labels stay low-cardinality: matched route templates, never raw paths

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged and otherwise ignored; the directory keeps
/// serving without metrics rather than refusing to start.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "userdir_requests_total",
                "Total HTTP requests by method, route and status"
            );
            describe_histogram!(
                "userdir_request_duration_seconds",
                "Request latency by method and route"
            );
            describe_gauge!("userdir_users", "User records currently stored");
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, address = %addr, "Failed to install metrics exporter");
        }
    }
}

/// Record one finished request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    counter!(
        "userdir_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "userdir_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(elapsed);
}

/// Record the current number of stored user records.
pub fn record_store_size(size: usize) {
    gauge!("userdir_users").set(size as f64);
}
