use serde::{Deserialize, Serialize};

use super::defaults;

/// Feedback coordinator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub accept_cooldown_secs: i64,
    pub reject_cooldown_secs: i64,
    /// Score multiplier applied on rejection, in (0, 1].
    pub reject_damping: f64,
    /// Score multiplier applied on acceptance.
    pub accept_score_factor: f64,
    /// Dispatch profile sync on a background thread instead of inline.
    pub background_sync: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            accept_cooldown_secs: defaults::DEFAULT_ACCEPT_COOLDOWN_SECS,
            reject_cooldown_secs: defaults::DEFAULT_REJECT_COOLDOWN_SECS,
            reject_damping: defaults::DEFAULT_REJECT_DAMPING,
            accept_score_factor: defaults::DEFAULT_ACCEPT_SCORE_FACTOR,
            background_sync: defaults::DEFAULT_BACKGROUND_SYNC,
        }
    }
}
