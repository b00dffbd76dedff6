use std::collections::HashSet;
use std::sync::Arc;

use interest_core::config::SelectionConfig;
use interest_core::errors::InterestResult;
use interest_core::models::{normalize_phrase, ConversationStore};
use tracing::{debug, info};

use crate::rate_limiter::RateLimiter;
use crate::ranking;
use crate::rules::{self, RuleContext};

/// Result of one selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(String),
    /// The global cap was already reached; no candidate was considered.
    RateLimited,
    NoEligibleCandidate,
}

impl SelectionOutcome {
    pub fn into_phrase(self) -> Option<String> {
        match self {
            Self::Selected(phrase) => Some(phrase),
            _ => None,
        }
    }
}

/// Applies the eligibility rules to a conversation store and surfaces at
/// most one phrase.
pub struct SelectionGate {
    config: SelectionConfig,
    limiter: Arc<RateLimiter>,
}

impl SelectionGate {
    pub fn new(config: SelectionConfig, limiter: Arc<RateLimiter>) -> Self {
        Self { config, limiter }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Pick the best eligible candidate and mark it shown.
    ///
    /// The rate-limit check and the record of the new suggestion happen under
    /// one lock of the shared limiter, so concurrent conversations can never
    /// push the log past its cap.
    pub fn select(
        &self,
        store: &mut ConversationStore,
        now: i64,
        existing_interests: &[String],
    ) -> InterestResult<SelectionOutcome> {
        let mut window = self.limiter.window()?;
        window.prune(now);
        if window.is_saturated() {
            debug!(
                conversation = %store.conversation_id,
                recent = window.len(),
                "rate limit reached, skipping selection"
            );
            return Ok(SelectionOutcome::RateLimited);
        }

        let existing: HashSet<String> = existing_interests
            .iter()
            .map(|p| normalize_phrase(p))
            .collect();
        let last_suggested = store
            .last_suggested_phrase
            .as_deref()
            .map(normalize_phrase);
        let ctx = RuleContext {
            now,
            existing: &existing,
            last_suggested: last_suggested.as_deref(),
            config: &self.config,
        };

        let winner = ranking::ranked(store)
            .into_iter()
            .find(|candidate| match rules::check(candidate, &ctx) {
                Ok(()) => true,
                Err(reason) => {
                    debug!(phrase = %candidate.phrase, ?reason, "candidate skipped");
                    false
                }
            })
            .map(|candidate| candidate.phrase.clone());

        let Some(phrase) = winner else {
            return Ok(SelectionOutcome::NoEligibleCandidate);
        };

        if let Some(candidate) = store.candidates.get_mut(&phrase) {
            candidate.last_shown_at = Some(now);
            candidate.cooldown_until = now.saturating_add(self.config.show_cooldown_secs);
        }
        store.last_suggested_phrase = Some(phrase.clone());
        window.record(now);
        info!(
            conversation = %store.conversation_id,
            phrase = %phrase,
            "suggestion surfaced"
        );
        Ok(SelectionOutcome::Selected(phrase))
    }
}
