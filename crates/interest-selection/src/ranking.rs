use std::cmp::Ordering;

use interest_core::models::{Candidate, ConversationStore};

/// Candidates in selection order: score descending, then most recently seen,
/// then phrase ascending so equal candidates always rank the same way.
pub fn ranked(store: &ConversationStore) -> Vec<&Candidate> {
    let mut candidates: Vec<&Candidate> = store.candidates.values().collect();
    candidates.sort_by(|a, b| compare(a, b));
    candidates
}

fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.last_seen_at.cmp(&a.last_seen_at))
        .then_with(|| a.phrase.cmp(&b.phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, f64, i64)]) -> ConversationStore {
        let mut store = ConversationStore::new("c");
        for (phrase, score, seen) in entries {
            let c = store.get_or_insert(phrase, *seen);
            c.score = *score;
            c.last_seen_at = *seen;
        }
        store
    }

    #[test]
    fn orders_by_score_then_recency_then_phrase() {
        let store = store_with(&[
            ("alpha", 1.0, 10),
            ("bravo", 2.0, 10),
            ("charlie", 1.0, 20),
            ("delta", 1.0, 10),
        ]);
        let order: Vec<_> = ranked(&store).iter().map(|c| c.phrase.as_str()).collect();
        assert_eq!(order, vec!["bravo", "charlie", "alpha", "delta"]);
    }
}
