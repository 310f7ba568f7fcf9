//! Demo target server for swell load scenarios.
//!
//! Serves a fixed set of endpoints, each with its own latency and
//! outcome profile, so a load run produces a predictable spread of fast,
//! slow, failing and missing responses. Every request is counted and
//! timed for Prometheus.

pub mod app;
pub mod handlers;
pub mod metrics;
