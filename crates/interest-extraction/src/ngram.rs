//! Contiguous n-gram windows over a filtered token sequence.

use interest_core::constants::{MAX_PHRASE_CHARS, MIN_PHRASE_CHARS};

use crate::stopwords;

/// A retained token with its topical classification.
#[derive(Debug, Clone)]
pub struct FilteredToken {
    pub text: String,
    pub topical: bool,
}

/// One n-gram window.
#[derive(Debug, Clone, PartialEq)]
pub struct NGram {
    pub phrase: String,
    pub token_count: usize,
    /// Tokens in the window classified as noun or named entity.
    pub topical_count: usize,
}

/// Build every contiguous window of length `1..=max_n`, in order of
/// position then length. Windows outside the phrase length bounds, or made
/// only of stop words, are dropped.
pub fn build(tokens: &[FilteredToken], max_n: usize) -> Vec<NGram> {
    let mut out = Vec::new();
    for start in 0..tokens.len() {
        for n in 1..=max_n {
            let end = start + n;
            if end > tokens.len() {
                break;
            }
            let window = &tokens[start..end];
            if window.iter().all(|t| stopwords::is_stop_word(&t.text)) {
                continue;
            }
            let phrase = window
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if !within_length_bounds(&phrase) {
                continue;
            }
            out.push(NGram {
                phrase,
                token_count: n,
                topical_count: window.iter().filter(|t| t.topical).count(),
            });
        }
    }
    out
}

/// Character length check, counted in chars rather than bytes.
pub fn within_length_bounds(phrase: &str) -> bool {
    let len = phrase.chars().count();
    (MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&len)
}
