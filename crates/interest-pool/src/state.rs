//! Pure pool state transitions. Locking and persistence live in the manager.

use std::collections::BTreeSet;

use interest_core::models::{normalize_phrase, same_phrase, SuggestionPoolEntry};

/// Everything persisted for one user's pool. The entries and the removed set
/// are stored under separate keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolState {
    /// Insertion-ordered entries.
    pub entries: Vec<SuggestionPoolEntry>,
    /// Normalized phrases that must never be asked about again.
    pub removed: BTreeSet<String>,
}

/// What [`PoolState::add`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { evicted: Option<String> },
    /// Already present; only the timestamp was refreshed.
    Touched,
    /// Permanently removed or empty phrase.
    Refused,
}

impl PoolState {
    /// Seed from the first `capacity` catalog phrases that are not removed.
    pub fn seeded(
        catalog: &[String],
        removed: BTreeSet<String>,
        capacity: usize,
        now: i64,
    ) -> Self {
        let mut state = Self {
            entries: Vec::new(),
            removed,
        };
        for phrase in catalog {
            if state.entries.len() >= capacity {
                break;
            }
            state.add(phrase, now, capacity);
        }
        state
    }

    pub fn position(&self, phrase: &str) -> Option<usize> {
        self.entries.iter().position(|e| same_phrase(&e.phrase, phrase))
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.position(phrase).is_some()
    }

    pub fn is_removed(&self, phrase: &str) -> bool {
        self.removed.contains(&normalize_phrase(phrase))
    }

    /// Mark the first unasked entry asked and return its phrase.
    pub fn ask_next(&mut self, now: i64) -> Option<String> {
        let entry = self.entries.iter_mut().find(|e| e.is_unasked())?;
        entry.was_asked = true;
        entry.timestamp = now;
        Some(entry.phrase.clone())
    }

    /// Insert a phrase, evicting one entry first when at capacity.
    pub fn add(&mut self, phrase: &str, now: i64, capacity: usize) -> AddOutcome {
        let phrase = normalize_phrase(phrase);
        if phrase.is_empty() || self.is_removed(&phrase) || capacity == 0 {
            return AddOutcome::Refused;
        }
        if let Some(i) = self.position(&phrase) {
            self.entries[i].timestamp = now;
            return AddOutcome::Touched;
        }
        let mut evicted = None;
        while self.entries.len() >= capacity {
            match self.evict_one() {
                Some(entry) => evicted = Some(entry.phrase),
                None => break,
            }
        }
        self.entries.push(SuggestionPoolEntry::new(phrase, now));
        AddOutcome::Added { evicted }
    }

    /// Evict the oldest unselected entry, or the oldest entry overall when
    /// every entry is selected. Ties go to the earlier position.
    pub fn evict_one(&mut self) -> Option<SuggestionPoolEntry> {
        let oldest = |selected_ok: bool| {
            self.entries
                .iter()
                .enumerate()
                .filter(|(_, e)| selected_ok || !e.is_selected)
                .min_by_key(|(i, e)| (e.timestamp, *i))
                .map(|(i, _)| i)
        };
        let index = oldest(false).or_else(|| oldest(true))?;
        Some(self.entries.remove(index))
    }

    pub fn mark_selected(&mut self, phrase: &str, now: i64) -> bool {
        match self.position(phrase) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.is_selected = true;
                entry.timestamp = now;
                true
            }
            None => false,
        }
    }

    /// Return an entry to `unasked` and move it behind every other entry.
    pub fn mark_rejected(&mut self, phrase: &str, now: i64) -> bool {
        let Some(i) = self.position(phrase) else {
            return false;
        };
        let mut entry = self.entries.remove(i);
        entry.was_asked = false;
        entry.timestamp = now;
        self.entries.push(entry);
        true
    }

    /// Delete the entry (if present) and remember the phrase as removed.
    pub fn remove(&mut self, phrase: &str) -> bool {
        let existed = match self.position(phrase) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        };
        let key = normalize_phrase(phrase);
        if !key.is_empty() {
            self.removed.insert(key);
        }
        existed
    }

    /// First catalog phrase that is neither in the pool nor removed.
    pub fn novel_phrase<'a>(&self, catalog: &'a [String]) -> Option<&'a str> {
        catalog
            .iter()
            .map(String::as_str)
            .find(|p| !self.contains(p) && !self.is_removed(p))
    }
}
