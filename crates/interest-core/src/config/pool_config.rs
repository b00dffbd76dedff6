use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of entries; also caps the adopted-interest list.
    pub capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_POOL_CAPACITY,
        }
    }
}
