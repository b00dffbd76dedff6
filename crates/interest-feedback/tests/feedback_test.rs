use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use interest_core::config::InterestConfig;
use interest_core::constants::{user_key, ADOPTED_KEY_PREFIX, REJECTIONS_KEY_PREFIX};
use interest_core::errors::InterestResult;
use interest_core::traits::IProfileSync;
use interest_feedback::{FeedbackCoordinator, RejectOutcome};
use interest_pool::SuggestionPoolManager;
use interest_session::SessionManager;
use test_fixtures::{test_config, FlakyStorage, ManualClock, RecordingProfileSync, T0};

struct Harness {
    conversations: Arc<SessionManager>,
    pool: Arc<SuggestionPoolManager>,
    storage: Arc<FlakyStorage>,
    sync: Arc<RecordingProfileSync>,
    coordinator: FeedbackCoordinator,
}

fn harness_with(config: InterestConfig, storage: Arc<FlakyStorage>, sync: Arc<RecordingProfileSync>) -> Harness {
    let clock = Arc::new(ManualClock::new(T0));
    let conversations = Arc::new(SessionManager::new());
    let pool = Arc::new(SuggestionPoolManager::with_catalog(
        "user-1",
        &config.pool,
        ["chess", "jazz", "hiking", "cooking", "music"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        storage.clone(),
        clock,
    ));
    let coordinator = FeedbackCoordinator::new(
        "user-1",
        &config,
        Arc::clone(&conversations),
        Arc::clone(&pool),
        storage.clone(),
        sync.clone(),
    );
    Harness {
        conversations,
        pool,
        storage,
        sync,
        coordinator,
    }
}

fn harness() -> Harness {
    harness_with(
        test_config(),
        Arc::new(FlakyStorage::new()),
        Arc::new(RecordingProfileSync::new()),
    )
}

// ── Accept ───────────────────────────────────────────────────────────────

#[test]
fn accept_updates_candidate_list_pool_and_profile() {
    let h = harness();
    h.conversations.with_store("conv", |store| {
        store.get_or_insert("chess", T0).record_mention(3.0, T0);
    })
    .unwrap();

    assert!(h.coordinator.accept("conv", "Chess", T0).unwrap());

    let chess = h.conversations.candidate("conv", "chess").unwrap();
    assert!(chess.accepted);
    assert!((chess.score - 1.5).abs() < 1e-9);
    assert_eq!(chess.cooldown_until, T0 + 7 * 24 * 3600);

    assert_eq!(h.coordinator.adopted_interests().unwrap(), vec!["chess"]);
    let stored = h.storage.json(&user_key(ADOPTED_KEY_PREFIX, "user-1")).unwrap();
    assert_eq!(stored, serde_json::json!(["chess"]));

    assert_eq!(h.sync.calls(), vec![("user-1".to_string(), vec!["chess".to_string()])]);

    let entry = h
        .pool
        .entries()
        .unwrap()
        .into_iter()
        .find(|e| e.phrase == "chess")
        .unwrap();
    assert!(entry.is_selected);
}

#[test]
fn accept_creates_missing_candidate() {
    let h = harness();
    h.coordinator.accept("fresh", "board games", T0).unwrap();
    let c = h.conversations.candidate("fresh", "board games").unwrap();
    assert!(c.accepted);
    assert_eq!(c.score, 0.0);
    assert_eq!(c.mention_count, 0);
}

#[test]
fn repeated_accept_is_idempotent() {
    let h = harness();
    assert!(h.coordinator.accept("a", "jazz", T0).unwrap());
    assert!(!h.coordinator.accept("b", "JAZZ", T0 + 5).unwrap());
    assert!(!h.coordinator.accept("a", "jazz ", T0 + 9).unwrap());

    assert_eq!(h.coordinator.adopted_interests().unwrap(), vec!["jazz"]);
    assert_eq!(h.sync.calls().len(), 1);
}

#[test]
fn adopted_list_is_newest_first_and_capped_at_pool_capacity() {
    let mut config = test_config();
    config.pool.capacity = 3;
    let h = harness_with(
        config,
        Arc::new(FlakyStorage::new()),
        Arc::new(RecordingProfileSync::new()),
    );
    for (i, phrase) in ["chess", "jazz", "hiking", "cooking"].iter().enumerate() {
        h.coordinator.accept("c", phrase, T0 + i as i64).unwrap();
    }
    let expected = vec!["cooking", "hiking", "jazz"];
    assert_eq!(h.coordinator.adopted_interests().unwrap(), expected);
    assert_eq!(h.sync.last_tags().unwrap(), expected);
}

#[test]
fn adopted_list_survives_restart() {
    let storage = Arc::new(FlakyStorage::new());
    {
        let h = harness_with(test_config(), storage.clone(), Arc::new(RecordingProfileSync::new()));
        h.coordinator.accept("c", "hiking", T0).unwrap();
    }
    let h = harness_with(test_config(), storage, Arc::new(RecordingProfileSync::new()));
    assert_eq!(h.coordinator.adopted_interests().unwrap(), vec!["hiking"]);
    assert!(!h.coordinator.accept("c", "hiking", T0).unwrap());
}

#[test]
fn empty_phrase_is_an_error() {
    let h = harness();
    assert!(h.coordinator.accept("c", "   ", T0).is_err());
    assert!(h.coordinator.reject("c", "", T0).is_err());
}

// ── Reject ───────────────────────────────────────────────────────────────

#[test]
fn first_rejection_defers_pool_entry() {
    let h = harness();
    h.conversations.with_store("conv", |store| {
        store.get_or_insert("jazz", T0).record_mention(2.0, T0);
    })
    .unwrap();

    let outcome = h.coordinator.reject("conv", "jazz", T0).unwrap();
    assert_eq!(outcome, RejectOutcome::Deferred);

    let jazz = h.conversations.candidate("conv", "jazz").unwrap();
    assert_eq!(jazz.disliked_count, 1);
    assert!((jazz.score - 1.0).abs() < 1e-9);
    assert_eq!(jazz.cooldown_until, T0 + 3600);

    let phrases: Vec<_> = h.pool.entries().unwrap().into_iter().map(|e| e.phrase).collect();
    assert_eq!(phrases.last().map(String::as_str), Some("jazz"));
    assert_eq!(h.coordinator.rejection_count("jazz").unwrap(), 1);
}

#[test]
fn two_rejections_in_one_conversation_remove_permanently() {
    let h = harness();
    assert_eq!(h.coordinator.reject("c", "chess", T0).unwrap(), RejectOutcome::Deferred);
    assert_eq!(h.coordinator.reject("c", "chess", T0 + 1).unwrap(), RejectOutcome::Removed);

    assert!(h.pool.is_removed("chess").unwrap());
    assert!(!h.pool.add_interest_to_pool("chess").unwrap());
    assert_eq!(h.coordinator.blocked_phrases().unwrap(), vec!["chess"]);
}

#[test]
fn rejections_across_conversations_remove_permanently() {
    let h = harness();
    assert_eq!(h.coordinator.reject("morning", "hiking", T0).unwrap(), RejectOutcome::Deferred);
    assert_eq!(
        h.coordinator.reject("evening", "Hiking", T0 + 60).unwrap(),
        RejectOutcome::Removed
    );
    assert_eq!(h.conversations.candidate("evening", "hiking").unwrap().disliked_count, 1);
    assert!(h.pool.is_removed("hiking").unwrap());

    let stored = h.storage.json(&user_key(REJECTIONS_KEY_PREFIX, "user-1")).unwrap();
    assert_eq!(stored, serde_json::json!({"hiking": 2}));
}

#[test]
fn rejection_tally_survives_restart() {
    let storage = Arc::new(FlakyStorage::new());
    {
        let h = harness_with(test_config(), storage.clone(), Arc::new(RecordingProfileSync::new()));
        h.coordinator.reject("c1", "cooking", T0).unwrap();
    }
    let h = harness_with(test_config(), storage, Arc::new(RecordingProfileSync::new()));
    assert_eq!(h.coordinator.reject("c2", "cooking", T0).unwrap(), RejectOutcome::Removed);
    assert!(h.pool.is_removed("cooking").unwrap());
}

// ── Collaborator failures ────────────────────────────────────────────────

#[test]
fn sync_failure_is_counted_not_returned() {
    let h = harness_with(
        test_config(),
        Arc::new(FlakyStorage::new()),
        Arc::new(RecordingProfileSync::failing()),
    );
    assert!(h.coordinator.accept("c", "music", T0).unwrap());
    assert_eq!(h.coordinator.sync_failures(), 1);
    assert_eq!(h.coordinator.adopted_interests().unwrap(), vec!["music"]);
}

#[test]
fn write_failure_keeps_in_memory_state() {
    let storage = Arc::new(FlakyStorage::new());
    storage.set_fail_writes(true);
    let h = harness_with(test_config(), storage, Arc::new(RecordingProfileSync::new()));
    assert!(h.coordinator.accept("c", "music", T0).unwrap());
    h.coordinator.reject("c", "jazz", T0).unwrap();
    assert_eq!(h.coordinator.reject("c", "jazz", T0).unwrap(), RejectOutcome::Removed);

    assert_eq!(h.coordinator.adopted_interests().unwrap(), vec!["music"]);
    assert_eq!(h.coordinator.rejection_count("jazz").unwrap(), 2);
    assert!(h.coordinator.persist_failures() >= 3);
    assert_eq!(h.sync.calls().len(), 1);
}

#[test]
fn read_failure_is_retried_without_losing_stored_state() {
    let storage = Arc::new(FlakyStorage::new());
    {
        let h = harness_with(test_config(), storage.clone(), Arc::new(RecordingProfileSync::new()));
        h.coordinator.accept("c1", "guitar", T0).unwrap();
        h.coordinator.accept("c1", "tennis", T0).unwrap();
        h.coordinator.reject("c1", "chess", T0).unwrap();
        assert_eq!(h.coordinator.reject("c1", "chess", T0).unwrap(), RejectOutcome::Removed);
    }

    let h = harness_with(test_config(), storage.clone(), Arc::new(RecordingProfileSync::new()));
    storage.set_fail_reads(true);
    assert!(h.coordinator.accept("c2", "jazz", T0).is_err());
    assert!(h.coordinator.adopted_interests().is_err());
    assert!(h.pool.get_next_unasked().is_err());
    assert!(h.sync.calls().is_empty());

    storage.set_fail_reads(false);
    assert!(h.coordinator.accept("c2", "jazz", T0).unwrap());

    let expected = vec!["jazz", "tennis", "guitar"];
    assert_eq!(h.coordinator.adopted_interests().unwrap(), expected);
    let stored = h.storage.json(&user_key(ADOPTED_KEY_PREFIX, "user-1")).unwrap();
    assert_eq!(stored, serde_json::json!(expected));
    assert_eq!(h.sync.last_tags().unwrap(), expected);
    assert_eq!(h.coordinator.rejection_count("chess").unwrap(), 2);

    let asked: Vec<String> = (0..10).filter_map(|_| h.pool.get_next_unasked().unwrap()).collect();
    assert!(!asked.is_empty());
    assert!(!asked.contains(&"chess".to_string()));
}

#[test]
fn background_sync_eventually_delivers() {
    let mut config = test_config();
    config.feedback.background_sync = true;
    let h = harness_with(
        config,
        Arc::new(FlakyStorage::new()),
        Arc::new(RecordingProfileSync::new()),
    );
    h.coordinator.accept("c", "chess", T0).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while h.sync.calls().is_empty() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(h.sync.last_tags().unwrap(), vec!["chess"]);
}

/// Profile sync whose first call stalls before reaching the remote.
#[derive(Default)]
struct SlowFirstSync {
    remote: RecordingProfileSync,
    stalled: AtomicBool,
}

impl IProfileSync for SlowFirstSync {
    fn replace_interests(&self, user_id: &str, tags: &[String]) -> InterestResult<()> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(300));
        }
        self.remote.replace_interests(user_id, tags)
    }
}

#[test]
fn background_sync_preserves_dispatch_order() {
    let mut config = test_config();
    config.feedback.background_sync = true;
    let storage = Arc::new(FlakyStorage::new());
    let clock = Arc::new(ManualClock::new(T0));
    let sync = Arc::new(SlowFirstSync::default());
    let pool = Arc::new(SuggestionPoolManager::new("user-1", &config.pool, storage.clone(), clock));
    let coordinator = FeedbackCoordinator::new(
        "user-1",
        &config,
        Arc::new(SessionManager::new()),
        pool,
        storage,
        sync.clone(),
    );

    coordinator.accept("c", "guitar", T0).unwrap();
    coordinator.accept("c", "tennis", T0).unwrap();
    let local = coordinator.adopted_interests().unwrap();
    assert_eq!(local, vec!["tennis", "guitar"]);

    // Dropping the coordinator waits for queued syncs.
    drop(coordinator);
    let calls = sync.remote.calls();
    assert!(!calls.is_empty() && calls.len() <= 2);
    assert_eq!(sync.remote.last_tags().unwrap(), local);
}

// ── Concurrency ──────────────────────────────────────────────────────────

#[test]
fn concurrent_accepts_never_duplicate() {
    let h = Arc::new(harness());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let h = Arc::clone(&h);
            thread::spawn(move || h.coordinator.accept(&format!("conv-{i}"), "jazz", T0).unwrap())
        })
        .collect();
    let newly: usize = handles
        .into_iter()
        .map(|t| usize::from(t.join().unwrap()))
        .sum();
    assert_eq!(newly, 1);
    assert_eq!(h.coordinator.adopted_interests().unwrap(), vec!["jazz"]);
}
