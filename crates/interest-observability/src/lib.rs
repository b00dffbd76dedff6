//! # interest-observability
//!
//! Structured logging setup, span macros for each engine operation, and the
//! lock-free counters behind `InterestEngine::metrics()`.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{EngineMetrics, FailureCounts, MetricsSnapshot};
pub use tracing_setup::{init_tracing, init_tracing_with_filter, TracingFormat};
