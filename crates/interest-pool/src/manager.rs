//! SuggestionPoolManager: lazy load, serialized mutation, write-through persistence.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use interest_core::config::PoolConfig;
use interest_core::constants::{user_key, POOL_KEY_PREFIX, REMOVED_KEY_PREFIX};
use interest_core::errors::{InterestError, InterestResult, StorageError};
use interest_core::models::{normalize_phrase, SuggestionPoolEntry};
use interest_core::traits::{IClock, IKeyValueStorage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::state::{AddOutcome, PoolState};

/// One user's suggestion pool.
///
/// State is loaded from storage on first use. Every operation runs its
/// read-modify-write under one mutex and persists the pool afterwards: the
/// ordered entry array under `suggestion_pool:{user}` and the removed set
/// under `removed_interests:{user}`.
///
/// A failed read leaves the pool unloaded and the operation returns the
/// error; the next call reads again. Write failures are logged and counted,
/// and the in-memory state stays authoritative for the rest of the process.
pub struct SuggestionPoolManager {
    user_id: String,
    storage_key: String,
    removed_key: String,
    capacity: usize,
    catalog: Vec<String>,
    storage: Arc<dyn IKeyValueStorage>,
    clock: Arc<dyn IClock>,
    state: Mutex<Option<PoolState>>,
    persist_failures: AtomicU64,
}

impl SuggestionPoolManager {
    pub fn new(
        user_id: impl Into<String>,
        config: &PoolConfig,
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self::with_catalog(user_id, config, catalog::default_catalog(), storage, clock)
    }

    /// Manager seeded from a custom catalog instead of the curated one.
    pub fn with_catalog(
        user_id: impl Into<String>,
        config: &PoolConfig,
        catalog: Vec<String>,
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        let user_id = user_id.into();
        Self {
            storage_key: user_key(POOL_KEY_PREFIX, &user_id),
            removed_key: user_key(REMOVED_KEY_PREFIX, &user_id),
            user_id,
            capacity: config.capacity,
            catalog: catalog.iter().map(|p| normalize_phrase(p)).collect(),
            storage,
            clock,
            state: Mutex::new(None),
            persist_failures: AtomicU64::new(0),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pool writes that failed since construction.
    pub fn persist_failures(&self) -> u64 {
        self.persist_failures.load(Ordering::Relaxed)
    }

    /// Return the first unasked phrase and mark it asked.
    ///
    /// When nothing is unasked, one novel catalog phrase is added (with
    /// eviction) and the lookup is retried once.
    pub fn get_next_unasked(&self) -> InterestResult<Option<String>> {
        let catalog = &self.catalog;
        let capacity = self.capacity;
        self.with_state(|state, now| {
            if let Some(phrase) = state.ask_next(now) {
                return (Some(phrase), true);
            }
            let Some(novel) = state.novel_phrase(catalog) else {
                return (None, false);
            };
            let novel = novel.to_string();
            if let AddOutcome::Added { evicted } = state.add(&novel, now, capacity) {
                debug!(phrase = %novel, evicted = ?evicted, "pool refilled from catalog");
            }
            (state.ask_next(now), true)
        })
    }

    /// Mark an entry as a confirmed interest. Unknown phrases are ignored.
    pub fn mark_selected(&self, phrase: &str) -> InterestResult<bool> {
        self.with_state(|state, now| {
            let changed = state.mark_selected(phrase, now);
            (changed, changed)
        })
    }

    /// Return an entry to unasked and move it to the back of the ask order.
    pub fn mark_rejected(&self, phrase: &str) -> InterestResult<bool> {
        self.with_state(|state, now| {
            let changed = state.mark_rejected(phrase, now);
            (changed, changed)
        })
    }

    /// Add a phrase, evicting the least recently touched entry when full.
    ///
    /// Returns `false` when the phrase is empty or permanently removed.
    pub fn add_interest_to_pool(&self, phrase: &str) -> InterestResult<bool> {
        let capacity = self.capacity;
        self.with_state(|state, now| match state.add(phrase, now, capacity) {
            AddOutcome::Added { evicted } => {
                if let Some(evicted) = evicted {
                    debug!(phrase = %phrase, evicted = %evicted, "pool entry evicted");
                }
                (true, true)
            }
            AddOutcome::Touched => (true, true),
            AddOutcome::Refused => (false, false),
        })
    }

    /// Drop an entry and never offer the phrase again.
    pub fn remove_entry(&self, phrase: &str) -> InterestResult<bool> {
        self.with_state(|state, _| {
            let existed = state.remove(phrase);
            info!(phrase = %phrase, existed, "phrase removed from pool");
            (existed, true)
        })
    }

    pub fn is_removed(&self, phrase: &str) -> InterestResult<bool> {
        self.with_state(|state, _| (state.is_removed(phrase), false))
    }

    /// Snapshot of the current entries in pool order.
    pub fn entries(&self) -> InterestResult<Vec<SuggestionPoolEntry>> {
        self.with_state(|state, _| (state.entries.clone(), false))
    }

    /// Run `f` over the loaded state. `f` returns its result and whether the
    /// entries changed and must be persisted. Growth of the removed set is
    /// persisted on its own key, before the entries.
    fn with_state<R>(&self, f: impl FnOnce(&mut PoolState, i64) -> (R, bool)) -> InterestResult<R> {
        let mut guard = self.state.lock().map_err(|_| InterestError::LockPoisoned {
            component: format!("suggestion pool {}", self.user_id),
        })?;
        let now = self.clock.now_secs();
        let mut seeded = false;
        if guard.is_none() {
            let (loaded, fresh) = match self.load_or_seed(now) {
                Ok(loaded) => loaded,
                Err(e) => {
                    warn!(user = %self.user_id, error = %e, "pool load failed, will retry");
                    return Err(e);
                }
            };
            *guard = Some(loaded);
            seeded = fresh;
        }
        let state = guard.get_or_insert_with(PoolState::default);
        let removed_before = state.removed.len();
        let (result, changed) = f(state, now);
        if state.removed.len() != removed_before {
            self.persist(&self.removed_key, &state.removed);
        }
        if seeded || changed {
            self.persist(&self.storage_key, &state.entries);
        }
        Ok(result)
    }

    /// Load the stored pool; seed a fresh one when none is stored or the
    /// stored entries cannot be decoded. The flag is `true` when the seeded
    /// pool should be written back. Read errors are returned untouched.
    fn load_or_seed(&self, now: i64) -> InterestResult<(PoolState, bool)> {
        let removed: BTreeSet<String> = self.read(&self.removed_key)?.unwrap_or_default();
        match self.read::<Vec<SuggestionPoolEntry>>(&self.storage_key)? {
            Some(mut entries) => {
                entries.retain(|e| !removed.contains(&normalize_phrase(&e.phrase)));
                debug!(user = %self.user_id, entries = entries.len(), "pool loaded");
                Ok((PoolState { entries, removed }, false))
            }
            None => Ok((self.seed(removed, now), true)),
        }
    }

    /// `Ok(None)` when the key is absent or its value cannot be decoded.
    fn read<T: DeserializeOwned>(&self, key: &str) -> InterestResult<Option<T>> {
        let Some(bytes) = self.storage.load(key)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                let err = StorageError::CorruptValue {
                    key: key.to_string(),
                    details: e.to_string(),
                };
                warn!(user = %self.user_id, error = %err, "discarding unreadable pool value");
                Ok(None)
            }
        }
    }

    fn seed(&self, removed: BTreeSet<String>, now: i64) -> PoolState {
        let state = PoolState::seeded(&self.catalog, removed, self.capacity, now);
        info!(user = %self.user_id, entries = state.entries.len(), "pool seeded from catalog");
        state
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_vec(value)
            .map_err(InterestError::from)
            .and_then(|bytes| self.storage.save(key, &bytes));
        if let Err(e) = result {
            self.persist_failures.fetch_add(1, Ordering::Relaxed);
            warn!(user = %self.user_id, key = %key, error = %e, "pool persist failed");
        }
    }
}
