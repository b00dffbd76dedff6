//! FeedbackCoordinator: accept/reject across conversation, user, and pool state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use interest_core::config::{FeedbackConfig, InterestConfig};
use interest_core::constants::{user_key, ADOPTED_KEY_PREFIX, REJECTIONS_KEY_PREFIX};
use interest_core::errors::{InterestError, InterestResult};
use interest_core::models::normalize_phrase;
use interest_core::traits::{IKeyValueStorage, IProfileSync};
use interest_pool::SuggestionPoolManager;
use interest_session::SessionManager;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adopted::AdoptedInterests;
use crate::feedback_processor;
use crate::sync::SyncDispatcher;
use crate::tally::RejectionTally;

/// What a rejection did to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectOutcome {
    /// Entry returned to unasked and moved to the back.
    Deferred,
    /// Dislike threshold reached; the phrase is gone for good.
    Removed,
}

#[derive(Debug, Default)]
struct UserState {
    adopted: AdoptedInterests,
    rejections: RejectionTally,
}

/// Per-user feedback state plus the handles feedback has to touch.
pub struct FeedbackCoordinator {
    user_id: String,
    config: FeedbackConfig,
    max_dislikes: u32,
    capacity: usize,
    conversations: Arc<SessionManager>,
    pool: Arc<SuggestionPoolManager>,
    storage: Arc<dyn IKeyValueStorage>,
    dispatcher: SyncDispatcher,
    state: Mutex<Option<UserState>>,
    persist_failures: AtomicU64,
}

impl FeedbackCoordinator {
    pub fn new(
        user_id: impl Into<String>,
        config: &InterestConfig,
        conversations: Arc<SessionManager>,
        pool: Arc<SuggestionPoolManager>,
        storage: Arc<dyn IKeyValueStorage>,
        sync: Arc<dyn IProfileSync>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            config: config.feedback.clone(),
            max_dislikes: config.selection.max_dislikes_before_removal,
            capacity: config.pool.capacity,
            conversations,
            pool,
            storage,
            dispatcher: SyncDispatcher::new(sync, config.feedback.background_sync),
            state: Mutex::new(None),
            persist_failures: AtomicU64::new(0),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn persist_failures(&self) -> u64 {
        self.persist_failures.load(Ordering::Relaxed)
    }

    pub fn sync_failures(&self) -> u64 {
        self.dispatcher.failures()
    }

    /// The user accepted `phrase` in `conversation_id`.
    ///
    /// Returns whether the phrase was newly adopted. Repeated accepts update
    /// the candidate again but never duplicate the adopted entry.
    pub fn accept(&self, conversation_id: &str, phrase: &str, now: i64) -> InterestResult<bool> {
        let phrase = validated(phrase)?;
        self.conversations.with_store(conversation_id, |store| {
            let candidate = store.get_or_insert(&phrase, now);
            feedback_processor::apply_accept(candidate, &self.config, now);
        })?;

        let adopted = self.with_state(|state| {
            if !state.adopted.adopt(&phrase, self.capacity) {
                return None;
            }
            self.persist(ADOPTED_KEY_PREFIX, &state.adopted);
            Some(state.adopted.as_slice().to_vec())
        })?;

        let newly_adopted = adopted.is_some();
        if let Some(tags) = adopted {
            self.dispatcher.dispatch(&self.user_id, tags);
        }
        self.pool.mark_selected(&phrase)?;

        info!(
            conversation = %conversation_id,
            phrase = %phrase,
            newly_adopted,
            "suggestion accepted"
        );
        Ok(newly_adopted)
    }

    /// The user rejected `phrase` in `conversation_id`.
    pub fn reject(
        &self,
        conversation_id: &str,
        phrase: &str,
        now: i64,
    ) -> InterestResult<RejectOutcome> {
        let phrase = validated(phrase)?;
        let disliked = self.conversations.with_store(conversation_id, |store| {
            let candidate = store.get_or_insert(&phrase, now);
            feedback_processor::apply_reject(candidate, &self.config, now)
        })?;

        let total = self.with_state(|state| {
            let total = state.rejections.record(&phrase);
            self.persist(REJECTIONS_KEY_PREFIX, &state.rejections);
            total
        })?;

        let outcome = if disliked >= self.max_dislikes || total >= self.max_dislikes {
            self.pool.remove_entry(&phrase)?;
            RejectOutcome::Removed
        } else {
            self.pool.mark_rejected(&phrase)?;
            RejectOutcome::Deferred
        };
        info!(
            conversation = %conversation_id,
            phrase = %phrase,
            disliked,
            total,
            outcome = ?outcome,
            "suggestion rejected"
        );
        Ok(outcome)
    }

    /// Adopted interests, newest first.
    pub fn adopted_interests(&self) -> InterestResult<Vec<String>> {
        self.with_state(|state| state.adopted.as_slice().to_vec())
    }

    /// Phrases rejected often enough to never be surfaced again.
    pub fn blocked_phrases(&self) -> InterestResult<Vec<String>> {
        self.with_state(|state| state.rejections.at_least(self.max_dislikes))
    }

    pub fn rejection_count(&self, phrase: &str) -> InterestResult<u32> {
        self.with_state(|state| state.rejections.count(phrase))
    }

    /// Run `f` over the loaded user state. A failed read leaves the state
    /// unloaded so the next call reads again, and nothing is persisted over
    /// values that were never read.
    fn with_state<R>(&self, f: impl FnOnce(&mut UserState) -> R) -> InterestResult<R> {
        let mut guard = self.state.lock().map_err(|_| InterestError::LockPoisoned {
            component: format!("feedback state {}", self.user_id),
        })?;
        if guard.is_none() {
            let loaded = self.load(ADOPTED_KEY_PREFIX).and_then(|adopted| {
                self.load(REJECTIONS_KEY_PREFIX)
                    .map(|rejections| UserState { adopted, rejections })
            });
            match loaded {
                Ok(state) => *guard = Some(state),
                Err(e) => {
                    warn!(user = %self.user_id, error = %e, "feedback state load failed, will retry");
                    return Err(e);
                }
            }
        }
        Ok(f(guard.get_or_insert_with(UserState::default)))
    }

    /// Read one stored value. Absent or undecodable values load as the
    /// default; read errors are returned.
    fn load<T: DeserializeOwned + Default>(&self, prefix: &str) -> InterestResult<T> {
        let key = user_key(prefix, &self.user_id);
        let Some(bytes) = self.storage.load(&key)? else {
            return Ok(T::default());
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                debug!(key = %key, "feedback state loaded");
                Ok(value)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable feedback state");
                Ok(T::default())
            }
        }
    }

    fn persist<T: Serialize>(&self, prefix: &str, value: &T) {
        let key = user_key(prefix, &self.user_id);
        let result = serde_json::to_vec(value)
            .map_err(InterestError::from)
            .and_then(|bytes| self.storage.save(&key, &bytes));
        if let Err(e) = result {
            self.persist_failures.fetch_add(1, Ordering::Relaxed);
            warn!(key = %key, error = %e, "feedback state persist failed");
        }
    }
}

fn validated(phrase: &str) -> InterestResult<String> {
    let normalized = normalize_phrase(phrase);
    if normalized.is_empty() {
        return Err(InterestError::InvalidPhrase {
            phrase: phrase.to_string(),
        });
    }
    Ok(normalized)
}
