//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pokedex_requests_total` (counter): lookups by response status
//! - `pokedex_request_duration_seconds` (histogram): lookup latency
//!
//! The Prometheus exporter runs on its own bind address and is only installed
//! from `main`; without a recorder the macros below are no-ops, which keeps
//! tests free of global state.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed lookup.
pub fn record_lookup(status: u16, start: Instant) {
    metrics::counter!("pokedex_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("pokedex_request_duration_seconds").record(start.elapsed().as_secs_f64());
}
