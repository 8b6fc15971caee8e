//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by terminal status
//! - `relay_upstream_failures_total` (counter): failed outbound calls
//!
//! # Design Decisions
//! - Counters are recorded unconditionally; without an installed recorder
//!   they are cheap no-ops
//! - Exposition is opt-in: the Prometheus exporter binds only when a metrics
//!   address is configured

use std::net::SocketAddr;

use axum::http::StatusCode;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, serving scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(err) => tracing::error!(error = %err, "Failed to install metrics exporter"),
    }
}

/// Record one relayed request by terminal status.
pub fn record_relay_request(status: StatusCode) {
    metrics::counter!("relay_requests_total", "status" => status.as_u16().to_string()).increment(1);
}

/// Record a failed outbound call.
pub fn record_upstream_failure() {
    metrics::counter!("relay_upstream_failures_total").increment(1);
}
