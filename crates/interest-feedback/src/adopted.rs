use interest_core::models::{normalize_phrase, same_phrase};
use serde::{Deserialize, Serialize};

/// Interests the user accepted, newest first, bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdoptedInterests(Vec<String>);

impl AdoptedInterests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `phrase` unless already present, then trim to `capacity`.
    /// Returns whether the list changed.
    pub fn adopt(&mut self, phrase: &str, capacity: usize) -> bool {
        if self.contains(phrase) {
            return false;
        }
        self.0.insert(0, normalize_phrase(phrase));
        self.0.truncate(capacity);
        true
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.0.iter().any(|p| same_phrase(p, phrase))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
