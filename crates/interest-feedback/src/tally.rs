use std::collections::BTreeMap;

use interest_core::models::normalize_phrase;
use serde::{Deserialize, Serialize};

/// Per-user rejection counts across all conversations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RejectionTally(BTreeMap<String, u32>);

impl RejectionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more rejection and return the new total.
    pub fn record(&mut self, phrase: &str) -> u32 {
        let count = self.0.entry(normalize_phrase(phrase)).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn count(&self, phrase: &str) -> u32 {
        self.0.get(&normalize_phrase(phrase)).copied().unwrap_or(0)
    }

    /// Phrases whose count reached `threshold`.
    pub fn at_least(&self, threshold: u32) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, count)| **count >= threshold)
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }
}
