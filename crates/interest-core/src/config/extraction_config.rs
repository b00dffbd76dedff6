use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extractor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Longest n-gram built from the filtered token sequence.
    pub max_ngram: usize,
    /// Multiplier applied to two-token phrases.
    pub bigram_boost: f64,
    /// Multiplier applied to phrases of three or more tokens.
    pub trigram_boost: f64,
    /// Additive bonus per token classified as a noun or named entity.
    pub noun_bonus: f64,
    /// Collapse runs of 3+ identical letters before tokenizing ("sooo" → "so").
    pub normalize_elongation: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_ngram: defaults::DEFAULT_MAX_NGRAM,
            bigram_boost: defaults::DEFAULT_BIGRAM_BOOST,
            trigram_boost: defaults::DEFAULT_TRIGRAM_BOOST,
            noun_bonus: defaults::DEFAULT_NOUN_BONUS,
            normalize_elongation: defaults::DEFAULT_NORMALIZE_ELONGATION,
        }
    }
}
