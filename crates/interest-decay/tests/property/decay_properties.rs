use interest_core::models::{ConversationStore, ExtractedPhrase};
use interest_decay::{decay_factor, decayed_score, DecayEngine};
use proptest::prelude::*;

const T0: i64 = 1_700_000_000;

// ── Decay follows S × e^(-Δ/τ) exactly ───────────────────────────────────

proptest! {
    #[test]
    fn decay_matches_closed_form(
        score in 0.0f64..100.0,
        delta in 1i64..200_000,
    ) {
        let engine = DecayEngine::default();
        let mut store = ConversationStore::new("c");
        engine.apply_message(
            &mut store,
            &[ExtractedPhrase { phrase: "topic".into(), weight: score, token_count: 1 }],
            T0,
        );
        engine.apply_message(&mut store, &[], T0 + delta);

        let expected = score * (-(delta as f64) / engine.tau_secs()).exp();
        let actual = store.get("topic").unwrap().score;
        prop_assert!((actual - expected).abs() <= 1e-9 * score.max(1.0));
        prop_assert!(actual >= 0.0);
    }
}

// ── Strictly decreasing in Δ ─────────────────────────────────────────────

proptest! {
    #[test]
    fn strictly_decreasing_in_elapsed_time(
        score in 0.1f64..100.0,
        d1 in 1u32..50_000,
        extra in 1u32..50_000,
    ) {
        let tau = 1800.0;
        let earlier = decayed_score(score, d1 as f64, tau);
        let later = decayed_score(score, (d1 + extra) as f64, tau);
        prop_assert!(later < earlier, "{} !< {}", later, earlier);
        prop_assert!(later >= 0.0);
    }
}

// ── Factor bounded in (0, 1] ─────────────────────────────────────────────

proptest! {
    #[test]
    fn factor_is_bounded(dt in -1_000.0f64..1_000_000.0, tau in 1.0f64..100_000.0) {
        let f = decay_factor(dt, tau);
        prop_assert!(f <= 1.0);
        prop_assert!(f >= 0.0);
    }
}
