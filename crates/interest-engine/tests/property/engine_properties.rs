use std::sync::Arc;

use interest_engine::{Collaborators, EngineOptions, InterestEngine};
use proptest::prelude::*;
use test_fixtures::{test_config, FixedAnalyzer, FlakyStorage, ManualClock, T0};

fn engine() -> InterestEngine {
    let options = EngineOptions {
        config: Some(test_config()),
        ..EngineOptions::for_user("prop")
    };
    let collaborators = Collaborators::default()
        .analyzer(Arc::new(FixedAnalyzer::with_common_nouns()))
        .storage(Arc::new(FlakyStorage::new()))
        .clock(Arc::new(ManualClock::new(T0)));
    InterestEngine::new(options, collaborators).unwrap()
}

const WORDS: &[&str] = &[
    "football", "weekend", "guitar", "chess", "jazz", "the", "and", "love", "playing", "team",
    "match", "cooking", "damn", "!!!", "42",
];

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" "))
}

// ── Never more than the hourly cap within one window ─────────────────────

proptest! {
    #[test]
    fn suggestions_within_one_window_respect_cap(
        messages in prop::collection::vec((0usize..3, message()), 1..40),
    ) {
        let engine = engine();
        let cap = engine.config().selection.max_suggestions_per_hour;
        let mut surfaced = 0;
        for (i, (conversation, text)) in messages.iter().enumerate() {
            let now = T0 + i as i64 * 30;
            if engine
                .process_message_at(&format!("c{conversation}"), text, &[], now)
                .is_some()
            {
                surfaced += 1;
            }
        }
        // 40 messages × 30s stays inside one rate window.
        prop_assert!(surfaced <= cap);
    }
}

// ── Candidate scores stay non-negative and finite ────────────────────────

proptest! {
    #[test]
    fn candidate_scores_are_non_negative(
        messages in prop::collection::vec(message(), 1..20),
        gaps in prop::collection::vec(0i64..20_000, 20),
        rejects in prop::collection::vec(prop::sample::select(WORDS), 0..5),
    ) {
        let engine = engine();
        let mut now = T0;
        for (text, gap) in messages.iter().zip(&gaps) {
            now += gap;
            engine.process_message_at("c", text, &[], now);
        }
        for phrase in rejects {
            engine.reject_at("c", phrase, now);
        }
        for candidate in engine.candidates("c") {
            prop_assert!(candidate.score >= 0.0);
            prop_assert!(candidate.score.is_finite());
        }
    }
}
