use serde::{Deserialize, Serialize};

use super::defaults;

/// Selection gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Global cap on suggestions surfaced within `rate_window_secs`.
    pub max_suggestions_per_hour: usize,
    /// Trailing window for the global rate limit.
    pub rate_window_secs: i64,
    pub min_score_to_suggest: f64,
    pub min_mentions: u32,
    /// A candidate at or above this score bypasses `min_mentions`.
    pub strong_single_mention_threshold: f64,
    /// Restrict the strong-mention bypass to single-token phrases.
    pub strong_bypass_unigrams_only: bool,
    /// Cooldown applied to a phrase after it is surfaced.
    pub show_cooldown_secs: i64,
    pub max_dislikes_before_removal: u32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_suggestions_per_hour: defaults::DEFAULT_MAX_SUGGESTIONS_PER_HOUR,
            rate_window_secs: defaults::DEFAULT_RATE_WINDOW_SECS,
            min_score_to_suggest: defaults::DEFAULT_MIN_SCORE_TO_SUGGEST,
            min_mentions: defaults::DEFAULT_MIN_MENTIONS,
            strong_single_mention_threshold: defaults::DEFAULT_STRONG_SINGLE_MENTION_THRESHOLD,
            strong_bypass_unigrams_only: defaults::DEFAULT_STRONG_BYPASS_UNIGRAMS_ONLY,
            show_cooldown_secs: defaults::DEFAULT_SHOW_COOLDOWN_SECS,
            max_dislikes_before_removal: defaults::DEFAULT_MAX_DISLIKES_BEFORE_REMOVAL,
        }
    }
}
