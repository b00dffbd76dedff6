use std::collections::HashMap;
use std::sync::Arc;

use interest_core::config::ExtractionConfig;
use interest_core::models::ExtractedPhrase;
use interest_core::traits::{ILinguisticAnalyzer, IProfanityFilter};
use tracing::debug;

use crate::ngram::{self, FilteredToken};
use crate::normalize::collapse_elongation;
use crate::{stopwords, weighting};

/// Stateless phrase extractor over injected linguistic and profanity
/// collaborators.
pub struct FeatureExtractor {
    config: ExtractionConfig,
    analyzer: Arc<dyn ILinguisticAnalyzer>,
    profanity: Arc<dyn IProfanityFilter>,
}

impl FeatureExtractor {
    pub fn new(
        config: ExtractionConfig,
        analyzer: Arc<dyn ILinguisticAnalyzer>,
        profanity: Arc<dyn IProfanityFilter>,
    ) -> Self {
        Self {
            config,
            analyzer,
            profanity,
        }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract weighted candidate phrases from one message.
    ///
    /// Returns an empty list for empty or fully profane text. A phrase that
    /// occurs more than once in the message is reported once, carrying the
    /// largest weight seen.
    pub fn extract_candidates(&self, text: &str) -> Vec<ExtractedPhrase> {
        let cleaned = if self.profanity.contains_profanity(text) {
            self.profanity.strip(text)
        } else {
            text.to_string()
        };
        if cleaned.trim().is_empty() {
            debug!("message empty after profanity stripping");
            return Vec::new();
        }

        let cleaned = if self.config.normalize_elongation {
            collapse_elongation(&cleaned)
        } else {
            cleaned
        };

        let tokens = self.filter_tokens(&cleaned);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<ExtractedPhrase> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for gram in ngram::build(&tokens, self.config.max_ngram) {
            let weight = weighting::weight(&gram, &self.config);
            match index.get(&gram.phrase) {
                Some(&i) => {
                    if weight > out[i].weight {
                        out[i].weight = weight;
                    }
                }
                None => {
                    index.insert(gram.phrase.clone(), out.len());
                    out.push(ExtractedPhrase {
                        phrase: gram.phrase,
                        weight,
                        token_count: gram.token_count,
                    });
                }
            }
        }
        debug!(phrases = out.len(), "extracted candidate phrases");
        out
    }

    /// Tokenize, lowercase, keep tokens with a letter, drop stop words, and
    /// classify the survivors against the cleaned text.
    fn filter_tokens(&self, text: &str) -> Vec<FilteredToken> {
        self.analyzer
            .tokenize(text)
            .into_iter()
            .filter_map(|raw| {
                let lower = raw.to_lowercase();
                if !lower.chars().any(char::is_alphabetic) || stopwords::is_stop_word(&lower) {
                    return None;
                }
                let topical = self.analyzer.classify(&raw, text).is_topical();
                Some(FilteredToken {
                    text: lower,
                    topical,
                })
            })
            .collect()
    }
}
