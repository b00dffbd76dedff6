use std::sync::Arc;

use interest_core::errors::InterestResult;
use interest_decay::DecayEngine;
use interest_extraction::FeatureExtractor;
use interest_selection::{SelectionGate, SelectionOutcome};
use tracing::debug;

use crate::manager::SessionManager;

/// The per-message pipeline over a shared [`SessionManager`].
pub struct ExtractionSession {
    extractor: FeatureExtractor,
    decay: DecayEngine,
    gate: SelectionGate,
    conversations: Arc<SessionManager>,
}

impl ExtractionSession {
    pub fn new(
        extractor: FeatureExtractor,
        decay: DecayEngine,
        gate: SelectionGate,
        conversations: Arc<SessionManager>,
    ) -> Self {
        Self {
            extractor,
            decay,
            gate,
            conversations,
        }
    }

    pub fn conversations(&self) -> &Arc<SessionManager> {
        &self.conversations
    }

    pub fn gate(&self) -> &SelectionGate {
        &self.gate
    }

    /// Process one outgoing message and maybe surface a suggestion.
    ///
    /// Extraction is pure and runs before the store lock is taken; decay,
    /// accumulation, and selection run under the conversation's lock.
    pub fn process_message(
        &self,
        conversation_id: &str,
        text: &str,
        existing_interests: &[String],
        now: i64,
    ) -> InterestResult<SelectionOutcome> {
        let phrases = self.extractor.extract_candidates(text);
        self.conversations.with_store(conversation_id, |store| {
            self.decay.apply_message(store, &phrases, now);
            debug!(
                conversation = %conversation_id,
                phrases = phrases.len(),
                candidates = store.len(),
                "message applied"
            );
            self.gate.select(store, now, existing_interests)
        })?
    }
}
