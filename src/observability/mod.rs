//! Observability subsystem.
//!
//! Structured logging via `tracing` (request IDs correlate log lines) and
//! Prometheus metrics on a separate scrape endpoint.

pub mod logging;
pub mod metrics;
