use crate::errors::InterestResult;

/// Durable key-value storage for the suggestion pool, adopted interests, and
/// the rejection tally. Values are opaque bytes (JSON in practice).
pub trait IKeyValueStorage: Send + Sync {
    fn load(&self, key: &str) -> InterestResult<Option<Vec<u8>>>;
    fn save(&self, key: &str, value: &[u8]) -> InterestResult<()>;
}
