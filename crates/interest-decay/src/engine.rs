use interest_core::config::DecayConfig;
use interest_core::models::{ConversationStore, ExtractedPhrase};
use tracing::trace;

use crate::formula;

/// Applies processed messages to a conversation's candidate store.
#[derive(Debug, Clone, Default)]
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn tau_secs(&self) -> f64 {
        self.config.tau_secs
    }

    /// Decay every candidate by the time elapsed since the store's last
    /// message. No-op before the first message or when the clock has not
    /// moved forward.
    pub fn apply_decay(&self, store: &mut ConversationStore, now: i64) {
        if store.last_message_at <= 0 {
            return;
        }
        let dt = now.saturating_sub(store.last_message_at);
        if dt <= 0 {
            return;
        }
        let factor = formula::decay_factor(dt as f64, self.config.tau_secs);
        for candidate in store.candidates.values_mut() {
            candidate.scale_score(factor);
        }
        trace!(dt, factor, candidates = store.len(), "decayed candidate scores");
    }

    /// Apply one processed message: decay, stamp `last_message_at`, then
    /// record a mention for each extracted phrase.
    ///
    /// Not idempotent. Callers apply each message exactly once, in send order.
    pub fn apply_message(
        &self,
        store: &mut ConversationStore,
        phrases: &[ExtractedPhrase],
        now: i64,
    ) {
        self.apply_decay(store, now);
        store.last_message_at = now;
        for extracted in phrases {
            store
                .get_or_insert(&extracted.phrase, now)
                .record_mention(extracted.weight, now);
        }
    }
}
