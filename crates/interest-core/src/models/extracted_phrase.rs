use serde::{Deserialize, Serialize};

/// A phrase produced by the feature extractor for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPhrase {
    pub phrase: String,
    /// Score increment contributed by this mention.
    pub weight: f64,
    pub token_count: usize,
}
