//! Test doubles for every collaborator trait, plus a manual clock.
//!
//! All doubles are deterministic and thread-safe so they can back
//! concurrency tests as well as single-threaded scenarios.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use interest_core::config::InterestConfig;
use interest_core::errors::{InterestResult, StorageError, SyncError};
use interest_core::models::{EntityKind, PartOfSpeech, TokenClass};
use interest_core::traits::{
    IClock, IKeyValueStorage, ILinguisticAnalyzer, IProfanityFilter, IProfileSync,
};

/// A fixed epoch used as the starting point of most scenarios.
pub const T0: i64 = 1_700_000_000;

/// Config with inline profile sync so assertions can run right after a call.
pub fn test_config() -> InterestConfig {
    let mut config = InterestConfig::default();
    config.feedback.background_sync = false;
    config
}

// ── Clock ────────────────────────────────────────────────────────────────

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) -> i64 {
        self.now.fetch_add(secs, Ordering::SeqCst) + secs
    }
}

impl IClock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ── Linguistics ──────────────────────────────────────────────────────────

/// Analyzer with an explicit lexicon: only listed words are nouns/entities.
#[derive(Debug, Default, Clone)]
pub struct FixedAnalyzer {
    lexicon: HashMap<String, TokenClass>,
}

impl FixedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer that knows the nouns used across the test scenarios.
    pub fn with_common_nouns() -> Self {
        Self::new().nouns(&[
            "football", "weekend", "guitar", "hiking", "cooking", "chess", "jazz", "movies",
            "photography", "music", "game", "team", "match",
        ])
    }

    pub fn nouns(mut self, words: &[&str]) -> Self {
        for w in words {
            self.lexicon
                .insert(w.to_lowercase(), TokenClass::new(PartOfSpeech::Noun, None));
        }
        self
    }

    pub fn entity(mut self, word: &str, kind: EntityKind) -> Self {
        self.lexicon
            .insert(word.to_lowercase(), TokenClass::new(PartOfSpeech::Noun, Some(kind)));
        self
    }
}

impl ILinguisticAnalyzer for FixedAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    fn classify(&self, token: &str, _context: &str) -> TokenClass {
        self.lexicon
            .get(&token.to_lowercase())
            .copied()
            .unwrap_or_else(TokenClass::other)
    }
}

// ── Profanity ────────────────────────────────────────────────────────────

/// Whole-word, case-insensitive profanity list.
#[derive(Debug, Default, Clone)]
pub struct ListProfanityFilter {
    words: HashSet<String>,
}

impl ListProfanityFilter {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    fn is_profane(&self, word: &str) -> bool {
        let trimmed: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        self.words.contains(&trimmed)
    }
}

impl IProfanityFilter for ListProfanityFilter {
    fn contains_profanity(&self, text: &str) -> bool {
        text.split_whitespace().any(|w| self.is_profane(w))
    }

    fn strip(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.is_profane(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ── Storage ──────────────────────────────────────────────────────────────

/// In-memory storage whose reads and writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    data: Mutex<HashMap<String, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Raw stored value, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.data.lock().ok()?.get(key).cloned()
    }

    /// Store a JSON value directly, bypassing failure injection.
    pub fn save_raw(&self, key: &str, value: &serde_json::Value) {
        if let Ok(mut data) = self.data.lock() {
            data.insert(key.to_string(), value.to_string().into_bytes());
        }
    }

    /// Decode a stored JSON value, bypassing failure injection.
    pub fn json(&self, key: &str) -> Option<serde_json::Value> {
        self.raw(key)
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    }
}

impl IKeyValueStorage for FlakyStorage {
    fn load(&self, key: &str) -> InterestResult<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, value: &[u8]) -> InterestResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }
        if let Ok(mut data) = self.data.lock() {
            data.insert(key.to_string(), value.to_vec());
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ── Profile sync ─────────────────────────────────────────────────────────

/// Records every `replace_interests` call; optionally fails them.
#[derive(Debug, Default)]
pub struct RecordingProfileSync {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    fail: AtomicBool,
}

impl RecordingProfileSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let s = Self::default();
        s.fail.store(true, Ordering::SeqCst);
        s
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn last_tags(&self) -> Option<Vec<String>> {
        self.calls().last().map(|(_, tags)| tags.clone())
    }
}

impl IProfileSync for RecordingProfileSync {
    fn replace_interests(&self, user_id: &str, tags: &[String]) -> InterestResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((user_id.to_string(), tags.to_vec()));
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(SyncError::Unavailable {
                reason: "injected failure".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
