//! SessionManager: concurrent per-conversation access via DashMap.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use interest_core::errors::{InterestError, InterestResult};
use interest_core::models::{Candidate, ConversationStore};

/// Registry of conversation stores.
///
/// Each store sits behind its own mutex: calls for the same conversation
/// serialize, calls for different conversations run in parallel. The map
/// shard lock is released before a store mutex is taken.
pub struct SessionManager {
    conversations: DashMap<String, Arc<Mutex<ConversationStore>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            conversations: DashMap::new(),
        }
    }

    /// Handle to a conversation's store, created lazily.
    pub fn store(&self, conversation_id: &str) -> Arc<Mutex<ConversationStore>> {
        if let Some(existing) = self.conversations.get(conversation_id) {
            return Arc::clone(existing.value());
        }
        let entry = self
            .conversations
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(ConversationStore::new(conversation_id))));
        Arc::clone(entry.value())
    }

    /// Run `f` with exclusive access to a conversation's store.
    pub fn with_store<R>(
        &self,
        conversation_id: &str,
        f: impl FnOnce(&mut ConversationStore) -> R,
    ) -> InterestResult<R> {
        let handle = self.store(conversation_id);
        let mut store = handle.lock().map_err(|_| InterestError::LockPoisoned {
            component: format!("conversation {conversation_id}"),
        })?;
        Ok(f(&mut store))
    }

    /// Cloned snapshot of a conversation's store, if it exists.
    pub fn snapshot(&self, conversation_id: &str) -> Option<ConversationStore> {
        let handle = Arc::clone(self.conversations.get(conversation_id)?.value());
        let store = handle.lock().ok()?;
        Some(store.clone())
    }

    /// Cloned candidate, if the conversation and phrase exist.
    pub fn candidate(&self, conversation_id: &str, phrase: &str) -> Option<Candidate> {
        self.snapshot(conversation_id)?.get(phrase).cloned()
    }

    /// Candidates of a conversation, highest score first.
    pub fn candidates(&self, conversation_id: &str) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self
            .snapshot(conversation_id)
            .map(|s| s.candidates.into_values().collect())
            .unwrap_or_default();
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates
    }

    pub fn remove(&self, conversation_id: &str) -> bool {
        self.conversations.remove(conversation_id).is_some()
    }

    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
