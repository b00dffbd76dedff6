use serde::{Deserialize, Serialize};

/// One phrase in a user's suggestion pool.
///
/// Serialized with camelCase keys: `{phrase, isSelected, wasAsked, timestamp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPoolEntry {
    pub phrase: String,
    /// The user confirmed interest.
    pub is_selected: bool,
    /// Already surfaced once through the ask-next flow.
    pub was_asked: bool,
    /// Last-touched time, used only for LRU ordering.
    pub timestamp: i64,
}

impl SuggestionPoolEntry {
    pub fn new(phrase: impl Into<String>, timestamp: i64) -> Self {
        Self {
            phrase: phrase.into(),
            is_selected: false,
            was_asked: false,
            timestamp,
        }
    }

    /// Eligible for the ask-next flow.
    pub fn is_unasked(&self) -> bool {
        !self.was_asked && !self.is_selected
    }
}
