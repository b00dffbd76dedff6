use std::sync::Arc;

use interest_core::config::PoolConfig;
use interest_pool::{PoolState, SuggestionPoolManager};
use proptest::prelude::*;
use test_fixtures::{FlakyStorage, ManualClock, T0};

#[derive(Debug, Clone)]
enum Op {
    Ask,
    Select(usize),
    Reject(usize),
    Add(usize),
    Remove(usize),
    Tick(i64),
}

const WORDS: &[&str] = &[
    "music", "chess", "hiking", "cooking", "jazz", "tennis", "baking", "anime", "skiing", "yoga",
];

fn op() -> impl Strategy<Value = Op> {
    let idx = 0..WORDS.len();
    prop_oneof![
        Just(Op::Ask),
        idx.clone().prop_map(Op::Select),
        idx.clone().prop_map(Op::Reject),
        idx.clone().prop_map(Op::Add),
        idx.prop_map(Op::Remove),
        (0i64..100).prop_map(Op::Tick),
    ]
}

// ── Pool never exceeds capacity and holds no duplicates ──────────────────

proptest! {
    #[test]
    fn capacity_and_uniqueness_hold(
        capacity in 1usize..6,
        ops in prop::collection::vec(op(), 1..60),
    ) {
        let clock = Arc::new(ManualClock::new(T0));
        let pool = SuggestionPoolManager::with_catalog(
            "prop-user",
            &PoolConfig { capacity },
            WORDS.iter().map(|s| s.to_string()).collect(),
            Arc::new(FlakyStorage::new()),
            clock.clone(),
        );

        for op in ops {
            match op {
                Op::Ask => { pool.get_next_unasked().unwrap(); }
                Op::Select(i) => { pool.mark_selected(WORDS[i]).unwrap(); }
                Op::Reject(i) => { pool.mark_rejected(WORDS[i]).unwrap(); }
                Op::Add(i) => { pool.add_interest_to_pool(WORDS[i]).unwrap(); }
                Op::Remove(i) => { pool.remove_entry(WORDS[i]).unwrap(); }
                Op::Tick(s) => { clock.advance(s); }
            }

            let entries = pool.entries().unwrap();
            prop_assert!(entries.len() <= capacity);
            let mut seen: Vec<&str> = entries.iter().map(|e| e.phrase.as_str()).collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), entries.len());
            for e in &entries {
                prop_assert!(!pool.is_removed(&e.phrase).unwrap());
            }
        }
    }
}

// ── Eviction never drops a selected entry while an unselected one exists ─

proptest! {
    #[test]
    fn eviction_spares_selected_entries(
        selected in prop::collection::vec(any::<bool>(), 2..6),
        timestamps in prop::collection::vec(0i64..50, 6),
    ) {
        let capacity = selected.len();
        let mut state = PoolState::default();
        for (i, is_selected) in selected.iter().enumerate() {
            state.add(WORDS[i], timestamps[i], capacity);
            if *is_selected {
                state.mark_selected(WORDS[i], timestamps[i]);
            }
        }
        let any_unselected = selected.iter().any(|s| !s);
        let evicted = state.evict_one().unwrap();
        if any_unselected {
            prop_assert!(!evicted.is_selected);
        }
    }
}
