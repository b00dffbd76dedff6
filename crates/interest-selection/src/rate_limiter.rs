//! Global sliding-window limiter over suggestion timestamps.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use interest_core::config::SelectionConfig;
use interest_core::errors::{InterestError, InterestResult};

/// Shared log of when suggestions were surfaced, in any conversation.
#[derive(Debug)]
pub struct RateLimiter {
    cap: usize,
    window_secs: i64,
    shown: Mutex<VecDeque<i64>>,
}

impl RateLimiter {
    pub fn new(cap: usize, window_secs: i64) -> Self {
        Self {
            cap,
            window_secs,
            shown: Mutex::new(VecDeque::new()),
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.max_suggestions_per_hour, config.rate_window_secs)
    }

    /// Lock the log for a check-then-record sequence.
    pub fn window(&self) -> InterestResult<RateWindow<'_>> {
        let guard = self.shown.lock().map_err(|_| InterestError::LockPoisoned {
            component: "rate_limiter".to_string(),
        })?;
        Ok(RateWindow {
            shown: guard,
            cap: self.cap,
            window_secs: self.window_secs,
        })
    }

    /// Suggestions surfaced within the trailing window ending at `now`.
    pub fn recent_count(&self, now: i64) -> InterestResult<usize> {
        let mut window = self.window()?;
        window.prune(now);
        Ok(window.len())
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

/// Locked view of the shown-timestamp log.
pub struct RateWindow<'a> {
    shown: MutexGuard<'a, VecDeque<i64>>,
    cap: usize,
    window_secs: i64,
}

impl RateWindow<'_> {
    /// Drop timestamps that have slid out of the window ending at `now`.
    pub fn prune(&mut self, now: i64) {
        while let Some(&oldest) = self.shown.front() {
            if oldest.saturating_add(self.window_secs) <= now {
                self.shown.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.shown.len() >= self.cap
    }

    pub fn record(&mut self, now: i64) {
        self.shown.push_back(now);
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_at_cap() {
        let limiter = RateLimiter::new(2, 3600);
        let mut w = limiter.window().unwrap();
        w.record(100);
        assert!(!w.is_saturated());
        w.record(200);
        assert!(w.is_saturated());
    }

    #[test]
    fn window_slides_past_oldest() {
        let limiter = RateLimiter::new(2, 3600);
        {
            let mut w = limiter.window().unwrap();
            w.record(100);
            w.record(200);
        }
        assert_eq!(limiter.recent_count(3699).unwrap(), 2);
        assert_eq!(limiter.recent_count(3700).unwrap(), 1);
        assert_eq!(limiter.recent_count(3800).unwrap(), 0);
    }

    #[test]
    fn pruning_near_i64_max_does_not_overflow() {
        let limiter = RateLimiter::new(2, 3600);
        limiter.window().unwrap().record(i64::MAX - 10);
        assert_eq!(limiter.recent_count(i64::MAX - 5).unwrap(), 1);
    }

    #[test]
    fn zero_cap_is_always_saturated() {
        let limiter = RateLimiter::new(0, 3600);
        assert!(limiter.window().unwrap().is_saturated());
    }
}
