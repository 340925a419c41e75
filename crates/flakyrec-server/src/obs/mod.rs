//! Lightweight in-process metrics.
//!
//! Store operations report through the `MetricsSink` trait; `ServiceMetrics`
//! keeps the values as atomics and renders them for the `/metrics` handler.

pub mod metrics;

pub use metrics::{MetricsSink, ServiceMetrics};
