/// Storage key prefix for a user's suggestion pool.
pub const POOL_KEY_PREFIX: &str = "suggestion_pool";

/// Storage key prefix for phrases permanently dropped from a user's pool.
pub const REMOVED_KEY_PREFIX: &str = "removed_interests";

/// Storage key prefix for a user's adopted-interest list.
pub const ADOPTED_KEY_PREFIX: &str = "adopted_interests";

/// Storage key prefix for a user's cross-conversation rejection tally.
pub const REJECTIONS_KEY_PREFIX: &str = "rejections";

/// Phrase length bounds, in characters.
pub const MIN_PHRASE_CHARS: usize = 3;
pub const MAX_PHRASE_CHARS: usize = 30;

/// Build the per-user storage key for a prefix.
pub fn user_key(prefix: &str, user_id: &str) -> String {
    format!("{prefix}:{user_id}")
}
