use interest_core::config::DecayConfig;
use interest_core::models::{ConversationStore, ExtractedPhrase};
use interest_decay::DecayEngine;

const T0: i64 = 1_700_000_000;

fn phrase(p: &str, weight: f64) -> ExtractedPhrase {
    ExtractedPhrase {
        phrase: p.to_string(),
        weight,
        token_count: p.split(' ').count(),
    }
}

#[test]
fn first_message_creates_candidates() {
    let engine = DecayEngine::default();
    let mut store = ConversationStore::new("c1");
    engine.apply_message(&mut store, &[phrase("football", 1.5)], T0);

    let c = store.get("football").unwrap();
    assert_eq!(c.mention_count, 1);
    assert!((c.score - 1.5).abs() < 1e-12);
    assert_eq!(c.last_seen_at, T0);
    assert_eq!(store.last_message_at, T0);
}

#[test]
fn score_decays_by_exp_between_messages() {
    let engine = DecayEngine::new(DecayConfig { tau_secs: 1800.0 });
    let mut store = ConversationStore::new("c1");
    engine.apply_message(&mut store, &[phrase("football", 2.0)], T0);
    engine.apply_message(&mut store, &[], T0 + 1800);

    let c = store.get("football").unwrap();
    let expected = 2.0 * (-1.0f64).exp();
    assert!((c.score - expected).abs() < 1e-9);
    assert_eq!(c.mention_count, 1, "empty message adds no mention");
    assert_eq!(store.last_message_at, T0 + 1800);
}

#[test]
fn decay_applies_before_new_mention() {
    let engine = DecayEngine::default();
    let mut store = ConversationStore::new("c1");
    engine.apply_message(&mut store, &[phrase("chess", 1.0)], T0);
    engine.apply_message(&mut store, &[phrase("chess", 1.0)], T0 + 1800);

    let c = store.get("chess").unwrap();
    let expected = (-1.0f64).exp() + 1.0;
    assert!((c.score - expected).abs() < 1e-9);
    assert_eq!(c.mention_count, 2);
    assert_eq!(c.last_seen_at, T0 + 1800);
}

#[test]
fn no_decay_when_clock_does_not_advance() {
    let engine = DecayEngine::default();
    let mut store = ConversationStore::new("c1");
    engine.apply_message(&mut store, &[phrase("jazz", 1.0)], T0);
    engine.apply_message(&mut store, &[phrase("jazz", 1.0)], T0);
    assert!((store.get("jazz").unwrap().score - 2.0).abs() < 1e-12);

    // A timestamp earlier than the last message never inflates scores.
    engine.apply_message(&mut store, &[], T0 - 60);
    assert!((store.get("jazz").unwrap().score - 2.0).abs() < 1e-12);
}

#[test]
fn extreme_timestamps_do_not_overflow() {
    let engine = DecayEngine::default();
    let mut store = ConversationStore::new("c1");
    engine.apply_message(&mut store, &[phrase("jazz", 1.0)], T0);
    engine.apply_message(&mut store, &[], i64::MIN);
    assert!((store.get("jazz").unwrap().score - 1.0).abs() < 1e-12);

    store.last_message_at = 1;
    engine.apply_decay(&mut store, i64::MAX);
    assert!(store.get("jazz").unwrap().score >= 0.0);
}

#[test]
fn reapplying_a_message_double_counts() {
    let engine = DecayEngine::default();
    let mut store = ConversationStore::new("c1");
    let msg = [phrase("guitar", 1.0)];
    engine.apply_message(&mut store, &msg, T0);
    engine.apply_message(&mut store, &msg, T0);
    assert_eq!(store.get("guitar").unwrap().mention_count, 2);
}

#[test]
fn decay_leaves_flags_untouched() {
    let engine = DecayEngine::default();
    let mut store = ConversationStore::new("c1");
    engine.apply_message(&mut store, &[phrase("hiking", 3.0)], T0);
    {
        let c = store.get_or_insert("hiking", T0);
        c.accepted = true;
        c.disliked_count = 1;
        c.cooldown_until = T0 + 100;
    }
    engine.apply_message(&mut store, &[], T0 + 3600);
    let c = store.get("hiking").unwrap();
    assert!(c.accepted);
    assert_eq!(c.disliked_count, 1);
    assert_eq!(c.cooldown_until, T0 + 100);
    assert!(c.score < 3.0 && c.score > 0.0);
}
