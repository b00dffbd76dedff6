use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{normalize_phrase, Candidate};

/// Per-conversation candidate state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationStore {
    pub conversation_id: String,
    /// Phrase → candidate. Keys are normalized phrases.
    pub candidates: HashMap<String, Candidate>,
    /// Timestamp of the last processed message; 0 before the first one.
    pub last_message_at: i64,
    /// The phrase most recently surfaced for this conversation.
    pub last_suggested_phrase: Option<String>,
}

impl ConversationStore {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, phrase: &str) -> Option<&Candidate> {
        self.candidates.get(&normalize_phrase(phrase))
    }

    /// Look up a candidate, creating an unscored one first seen at `now`.
    pub fn get_or_insert(&mut self, phrase: &str, now: i64) -> &mut Candidate {
        let key = normalize_phrase(phrase);
        self.candidates
            .entry(key.clone())
            .or_insert_with(|| Candidate::new(key, now))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
