//! InterestEngine: the caller-facing service object.

use std::sync::Arc;
use std::time::Instant;

use interest_core::config::InterestConfig;
use interest_core::errors::InterestResult;
use interest_core::models::{Candidate, SuggestionPoolEntry};
use interest_core::traits::{IClock, IKeyValueStorage};
use interest_decay::DecayEngine;
use interest_extraction::FeatureExtractor;
use interest_feedback::{FeedbackCoordinator, RejectOutcome};
use interest_observability::{
    feedback_span, message_span, pool_span, EngineMetrics, FailureCounts, MetricsSnapshot,
};
use interest_pool::SuggestionPoolManager;
use interest_selection::{RateLimiter, SelectionGate, SelectionOutcome};
use interest_session::{ExtractionSession, SessionManager};
use interest_storage::{MemoryKeyValueStore, SqliteKeyValueStore};
use tracing::{debug, info, warn};

use crate::options::{Collaborators, EngineOptions};

/// One user's interest engine.
///
/// Built once and shared (`Arc<InterestEngine>`) across every conversation of
/// that user. All operations are safe to call concurrently.
pub struct InterestEngine {
    user_id: String,
    config: InterestConfig,
    clock: Arc<dyn IClock>,
    session: ExtractionSession,
    pool: Arc<SuggestionPoolManager>,
    feedback: FeedbackCoordinator,
    metrics: EngineMetrics,
}

impl InterestEngine {
    /// Build an engine. Fails only on invalid configuration or when the
    /// SQLite file cannot be opened.
    pub fn new(options: EngineOptions, collaborators: Collaborators) -> InterestResult<Self> {
        let config = match (options.config, options.config_toml.as_deref()) {
            (Some(config), _) => {
                config.validate()?;
                config
            }
            (None, Some(source)) => InterestConfig::from_toml(source)?,
            (None, None) => InterestConfig::default(),
        };

        let storage: Arc<dyn IKeyValueStorage> = match (collaborators.storage, &options.db_path) {
            (Some(storage), _) => storage,
            (None, Some(path)) => Arc::new(SqliteKeyValueStore::open(path)?),
            (None, None) => Arc::new(MemoryKeyValueStore::new()),
        };

        let extractor = FeatureExtractor::new(
            config.extraction.clone(),
            collaborators.analyzer,
            collaborators.profanity,
        );
        let limiter = Arc::new(RateLimiter::from_config(&config.selection));
        let conversations = Arc::new(SessionManager::new());
        let session = ExtractionSession::new(
            extractor,
            DecayEngine::new(config.decay.clone()),
            SelectionGate::new(config.selection.clone(), limiter),
            Arc::clone(&conversations),
        );

        let pool = Arc::new(match options.catalog {
            Some(catalog) => SuggestionPoolManager::with_catalog(
                options.user_id.as_str(),
                &config.pool,
                catalog,
                Arc::clone(&storage),
                Arc::clone(&collaborators.clock),
            ),
            None => SuggestionPoolManager::new(
                options.user_id.as_str(),
                &config.pool,
                Arc::clone(&storage),
                Arc::clone(&collaborators.clock),
            ),
        });

        let feedback = FeedbackCoordinator::new(
            options.user_id.as_str(),
            &config,
            conversations,
            Arc::clone(&pool),
            storage,
            collaborators.profile_sync,
        );

        info!(user = %options.user_id, "interest engine ready");
        Ok(Self {
            user_id: options.user_id,
            config,
            clock: collaborators.clock,
            session,
            pool,
            feedback,
            metrics: EngineMetrics::new(),
        })
    }

    /// Engine with every default collaborator and in-memory state.
    pub fn with_defaults(user_id: impl Into<String>) -> InterestResult<Self> {
        Self::new(EngineOptions::for_user(user_id), Collaborators::default())
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn config(&self) -> &InterestConfig {
        &self.config
    }

    // ── Messages ─────────────────────────────────────────────────────────

    /// Feed one outgoing message; returns at most one phrase to suggest.
    pub fn process_message(
        &self,
        conversation_id: &str,
        text: &str,
        existing_interests: &[String],
    ) -> Option<String> {
        self.process_message_at(conversation_id, text, existing_interests, self.clock.now_secs())
    }

    pub fn process_message_at(
        &self,
        conversation_id: &str,
        text: &str,
        existing_interests: &[String],
        now: i64,
    ) -> Option<String> {
        let _span = message_span!(conversation_id).entered();
        let started = Instant::now();

        let excluded = self.excluded_phrases(existing_interests);
        let outcome = self
            .session
            .process_message(conversation_id, text, &excluded, now);
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                self.internal_error("process_message", &e);
                SelectionOutcome::NoEligibleCandidate
            }
        };
        self.metrics.record_message(
            started.elapsed(),
            matches!(outcome, SelectionOutcome::Selected(_)),
            outcome == SelectionOutcome::RateLimited,
        );
        outcome.into_phrase()
    }

    /// Caller-supplied interests plus adopted and permanently rejected phrases.
    fn excluded_phrases(&self, existing_interests: &[String]) -> Vec<String> {
        let mut excluded = existing_interests.to_vec();
        match self.feedback.adopted_interests() {
            Ok(adopted) => excluded.extend(adopted),
            Err(e) => self.internal_error("adopted_interests", &e),
        }
        match self.feedback.blocked_phrases() {
            Ok(blocked) => excluded.extend(blocked),
            Err(e) => self.internal_error("blocked_phrases", &e),
        }
        excluded
    }

    /// Drop a conversation's candidate store.
    pub fn end_conversation(&self, conversation_id: &str) -> bool {
        let removed = self.session.conversations().remove(conversation_id);
        debug!(conversation = %conversation_id, removed, "conversation ended");
        removed
    }

    /// Candidates of a conversation, highest score first.
    pub fn candidates(&self, conversation_id: &str) -> Vec<Candidate> {
        self.session.conversations().candidates(conversation_id)
    }

    // ── Feedback ─────────────────────────────────────────────────────────

    pub fn accept(&self, conversation_id: &str, phrase: &str) {
        self.accept_at(conversation_id, phrase, self.clock.now_secs());
    }

    pub fn accept_at(&self, conversation_id: &str, phrase: &str, now: i64) {
        let _span = feedback_span!("accept", conversation_id, phrase).entered();
        match self.feedback.accept(conversation_id, phrase, now) {
            Ok(_) => self.metrics.record_accept(),
            Err(e) => self.internal_error("accept", &e),
        }
    }

    pub fn reject(&self, conversation_id: &str, phrase: &str) {
        self.reject_at(conversation_id, phrase, self.clock.now_secs());
    }

    pub fn reject_at(&self, conversation_id: &str, phrase: &str, now: i64) {
        let _span = feedback_span!("reject", conversation_id, phrase).entered();
        match self.feedback.reject(conversation_id, phrase, now) {
            Ok(RejectOutcome::Removed) => {
                self.metrics.record_reject();
                info!(phrase = %phrase, "phrase permanently removed");
            }
            Ok(RejectOutcome::Deferred) => self.metrics.record_reject(),
            Err(e) => self.internal_error("reject", &e),
        }
    }

    /// Adopted interests, newest first.
    pub fn adopted_interests(&self) -> Vec<String> {
        self.feedback.adopted_interests().unwrap_or_else(|e| {
            self.internal_error("adopted_interests", &e);
            Vec::new()
        })
    }

    // ── Suggestion pool ──────────────────────────────────────────────────

    /// Next pool phrase to ask the user about, marked asked.
    pub fn get_next_unasked(&self) -> Option<String> {
        let _span = pool_span!("get_next_unasked").entered();
        match self.pool.get_next_unasked() {
            Ok(phrase) => {
                if phrase.is_some() {
                    self.metrics.record_pool_ask();
                }
                phrase
            }
            Err(e) => {
                self.internal_error("get_next_unasked", &e);
                None
            }
        }
    }

    pub fn mark_selected(&self, phrase: &str) {
        let _span = pool_span!("mark_selected").entered();
        if let Err(e) = self.pool.mark_selected(phrase) {
            self.internal_error("mark_selected", &e);
        }
    }

    pub fn mark_rejected(&self, phrase: &str) {
        let _span = pool_span!("mark_rejected").entered();
        if let Err(e) = self.pool.mark_rejected(phrase) {
            self.internal_error("mark_rejected", &e);
        }
    }

    /// Returns `false` when the phrase is empty or permanently removed.
    pub fn add_interest_to_pool(&self, phrase: &str) -> bool {
        let _span = pool_span!("add_interest_to_pool").entered();
        self.pool.add_interest_to_pool(phrase).unwrap_or_else(|e| {
            self.internal_error("add_interest_to_pool", &e);
            false
        })
    }

    pub fn pool_entries(&self) -> Vec<SuggestionPoolEntry> {
        self.pool.entries().unwrap_or_else(|e| {
            self.internal_error("pool_entries", &e);
            Vec::new()
        })
    }

    // ── Metrics ──────────────────────────────────────────────────────────

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot(FailureCounts {
            persist_failures: self.pool.persist_failures() + self.feedback.persist_failures(),
            sync_failures: self.feedback.sync_failures(),
        })
    }

    fn internal_error(&self, operation: &str, error: &dyn std::error::Error) {
        self.metrics.record_internal_error();
        warn!(operation, error = %error, "operation degraded");
    }
}
