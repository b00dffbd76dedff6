use interest_core::config::ExtractionConfig;

use crate::ngram::NGram;

/// Base increment for a single mention.
pub const BASE_WEIGHT: f64 = 1.0;

/// Increment weight for one n-gram mention:
/// `BASE_WEIGHT × length_boost + noun_bonus × topical_tokens`.
pub fn weight(gram: &NGram, config: &ExtractionConfig) -> f64 {
    let boost = match gram.token_count {
        0 | 1 => 1.0,
        2 => config.bigram_boost,
        _ => config.trigram_boost,
    };
    BASE_WEIGHT * boost + config.noun_bonus * gram.topical_count as f64
}
