//! Engine counters.
//!
//! [`EngineMetrics`] is shared by reference and updated with relaxed atomics;
//! [`MetricsSnapshot`] is the serializable point-in-time view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Live counters owned by the engine.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    messages_processed: AtomicU64,
    processing_micros: AtomicU64,
    suggestions_surfaced: AtomicU64,
    rate_limited: AtomicU64,
    accepts: AtomicU64,
    rejects: AtomicU64,
    pool_asks: AtomicU64,
    internal_errors: AtomicU64,
}

/// Failure counts kept by the pool and feedback components themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureCounts {
    pub persist_failures: u64,
    pub sync_failures: u64,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub messages_processed: u64,
    pub suggestions_surfaced: u64,
    pub rate_limited: u64,
    pub accepts: u64,
    pub rejects: u64,
    pub pool_asks: u64,
    pub persist_failures: u64,
    pub sync_failures: u64,
    pub internal_errors: u64,
    /// Mean wall time of `process_message`, in microseconds.
    pub avg_processing_micros: f64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_message(&self, elapsed: Duration, surfaced: bool, rate_limited: bool) {
        self.messages_processed.fetch_add(1, Ordering::Relaxed);
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.processing_micros.fetch_add(micros, Ordering::Relaxed);
        if surfaced {
            self.suggestions_surfaced.fetch_add(1, Ordering::Relaxed);
        }
        if rate_limited {
            self.rate_limited.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_accept(&self) {
        self.accepts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reject(&self) {
        self.rejects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pool_ask(&self) {
        self.pool_asks.fetch_add(1, Ordering::Relaxed);
    }

    /// An internal error (e.g. a poisoned lock) was logged and swallowed.
    pub fn record_internal_error(&self) {
        self.internal_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, failures: FailureCounts) -> MetricsSnapshot {
        let messages = self.messages_processed.load(Ordering::Relaxed);
        let micros = self.processing_micros.load(Ordering::Relaxed);
        MetricsSnapshot {
            messages_processed: messages,
            suggestions_surfaced: self.suggestions_surfaced.load(Ordering::Relaxed),
            rate_limited: self.rate_limited.load(Ordering::Relaxed),
            accepts: self.accepts.load(Ordering::Relaxed),
            rejects: self.rejects.load(Ordering::Relaxed),
            pool_asks: self.pool_asks.load(Ordering::Relaxed),
            persist_failures: failures.persist_failures,
            sync_failures: failures.sync_failures,
            internal_errors: self.internal_errors.load(Ordering::Relaxed),
            avg_processing_micros: if messages == 0 {
                0.0
            } else {
                micros as f64 / messages as f64
            },
        }
    }
}

impl MetricsSnapshot {
    /// Share of processed messages that surfaced a suggestion.
    pub fn surface_rate(&self) -> f64 {
        if self.messages_processed == 0 {
            return 0.0;
        }
        self.suggestions_surfaced as f64 / self.messages_processed as f64
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
