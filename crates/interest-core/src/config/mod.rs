pub mod decay_config;
pub mod defaults;
pub mod extraction_config;
pub mod feedback_config;
pub mod pool_config;
pub mod selection_config;

pub use decay_config::DecayConfig;
pub use extraction_config::ExtractionConfig;
pub use feedback_config::FeedbackConfig;
pub use pool_config::PoolConfig;
pub use selection_config::SelectionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestConfig {
    pub extraction: ExtractionConfig,
    pub decay: DecayConfig,
    pub selection: SelectionConfig,
    pub pool: PoolConfig,
    pub feedback: FeedbackConfig,
}

impl InterestConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the algorithms cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.max_ngram == 0 {
            return Err(invalid("extraction.max_ngram", "must be at least 1"));
        }
        if self.extraction.bigram_boost < 1.0 || self.extraction.trigram_boost < 1.0 {
            return Err(invalid("extraction.*_boost", "boosts must be >= 1.0"));
        }
        if self.extraction.noun_bonus < 0.0 {
            return Err(invalid("extraction.noun_bonus", "must be non-negative"));
        }
        if !(self.decay.tau_secs > 0.0) {
            return Err(invalid("decay.tau_secs", "must be positive"));
        }
        if self.selection.rate_window_secs <= 0 {
            return Err(invalid("selection.rate_window_secs", "must be positive"));
        }
        if self.pool.capacity == 0 {
            return Err(invalid("pool.capacity", "must be at least 1"));
        }
        if !(self.feedback.reject_damping > 0.0 && self.feedback.reject_damping <= 1.0) {
            return Err(invalid("feedback.reject_damping", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.feedback.accept_score_factor) {
            return Err(invalid("feedback.accept_score_factor", "must be in [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
