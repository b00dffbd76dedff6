//! Construction inputs for [`InterestEngine`](crate::InterestEngine).

use std::path::PathBuf;
use std::sync::Arc;

use interest_core::config::InterestConfig;
use interest_core::errors::InterestResult;
use interest_core::traits::{
    IClock, IKeyValueStorage, ILinguisticAnalyzer, IProfanityFilter, IProfileSync, SystemClock,
};
use interest_extraction::{HeuristicAnalyzer, WordListProfanityFilter};
use tracing::debug;

/// Options for building an engine.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// The user whose pool, adopted interests, and rejections are managed.
    pub user_id: String,
    /// SQLite file for durable state. Ignored when a storage collaborator is
    /// supplied; `None` keeps state in memory.
    pub db_path: Option<PathBuf>,
    /// TOML configuration. Ignored when `config` is set.
    pub config_toml: Option<String>,
    pub config: Option<InterestConfig>,
    /// Phrases seeding the suggestion pool, replacing the curated catalog.
    pub catalog: Option<Vec<String>>,
}

impl EngineOptions {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

/// Injected collaborators. Unset slots fall back to the built-in defaults.
pub struct Collaborators {
    pub analyzer: Arc<dyn ILinguisticAnalyzer>,
    pub profanity: Arc<dyn IProfanityFilter>,
    pub storage: Option<Arc<dyn IKeyValueStorage>>,
    pub profile_sync: Arc<dyn IProfileSync>,
    pub clock: Arc<dyn IClock>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            analyzer: Arc::new(HeuristicAnalyzer::new()),
            profanity: Arc::new(WordListProfanityFilter::default()),
            storage: None,
            profile_sync: Arc::new(LoggingProfileSync),
            clock: Arc::new(SystemClock),
        }
    }
}

impl Collaborators {
    pub fn analyzer(mut self, analyzer: Arc<dyn ILinguisticAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn profanity(mut self, profanity: Arc<dyn IProfanityFilter>) -> Self {
        self.profanity = profanity;
        self
    }

    pub fn storage(mut self, storage: Arc<dyn IKeyValueStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn profile_sync(mut self, profile_sync: Arc<dyn IProfileSync>) -> Self {
        self.profile_sync = profile_sync;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn IClock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Profile sync for hosts without a remote profile: logs and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProfileSync;

impl IProfileSync for LoggingProfileSync {
    fn replace_interests(&self, user_id: &str, tags: &[String]) -> InterestResult<()> {
        debug!(user = %user_id, tags = ?tags, "profile sync not configured");
        Ok(())
    }
}
