//! # interest-extraction
//!
//! Turns raw message text into weighted candidate phrases.
//! Profanity stripping → optional elongation normalization → tokenization →
//! stop-word filtering → 1..=3-gram windows → weighting.
//!
//! Also ships default collaborators ([`HeuristicAnalyzer`],
//! [`WordListProfanityFilter`]) for hosts without their own.

pub mod analyzer;
pub mod engine;
pub mod ngram;
pub mod normalize;
pub mod profanity;
pub mod stopwords;
pub mod weighting;

pub use analyzer::HeuristicAnalyzer;
pub use engine::FeatureExtractor;
pub use profanity::WordListProfanityFilter;
