use crate::models::TokenClass;

/// Tokenization and lightweight part-of-speech / named-entity classification.
pub trait ILinguisticAnalyzer: Send + Sync {
    /// Split text into word tokens, preserving original casing.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Classify one token. `context` is the full text the token came from.
    fn classify(&self, token: &str, context: &str) -> TokenClass;
}
