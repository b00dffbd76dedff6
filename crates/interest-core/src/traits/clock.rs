use chrono::Utc;

/// Wall-clock source. All decay, cooldown, and rate-limit math runs on the
/// timestamp this returns at call time.
pub trait IClock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now_secs(&self) -> i64;
}

/// Production clock backed by `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IClock for SystemClock {
    fn now_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}
