use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate score decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Exponential decay time constant τ in seconds: `score × e^(-dt/τ)`.
    pub tau_secs: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            tau_secs: defaults::DEFAULT_DECAY_TAU_SECS,
        }
    }
}
