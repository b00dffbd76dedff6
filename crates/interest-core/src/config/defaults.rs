//! Default values for every tunable in [`InterestConfig`](super::InterestConfig).

// Extraction
pub const DEFAULT_MAX_NGRAM: usize = 3;
pub const DEFAULT_BIGRAM_BOOST: f64 = 1.25;
pub const DEFAULT_TRIGRAM_BOOST: f64 = 1.5;
pub const DEFAULT_NOUN_BONUS: f64 = 0.5;
pub const DEFAULT_NORMALIZE_ELONGATION: bool = false;

// Decay
pub const DEFAULT_DECAY_TAU_SECS: f64 = 1800.0;

// Selection
pub const DEFAULT_MAX_SUGGESTIONS_PER_HOUR: usize = 3;
pub const DEFAULT_RATE_WINDOW_SECS: i64 = 3600;
pub const DEFAULT_MIN_SCORE_TO_SUGGEST: f64 = 1.2;
pub const DEFAULT_MIN_MENTIONS: u32 = 2;
pub const DEFAULT_STRONG_SINGLE_MENTION_THRESHOLD: f64 = 1.5;
pub const DEFAULT_STRONG_BYPASS_UNIGRAMS_ONLY: bool = true;
pub const DEFAULT_SHOW_COOLDOWN_SECS: i64 = 900;
pub const DEFAULT_MAX_DISLIKES_BEFORE_REMOVAL: u32 = 2;

// Pool
pub const DEFAULT_POOL_CAPACITY: usize = 5;

// Feedback
pub const DEFAULT_ACCEPT_COOLDOWN_SECS: i64 = 7 * 24 * 3600;
pub const DEFAULT_REJECT_COOLDOWN_SECS: i64 = 3600;
pub const DEFAULT_REJECT_DAMPING: f64 = 0.5;
pub const DEFAULT_ACCEPT_SCORE_FACTOR: f64 = 0.5;
pub const DEFAULT_BACKGROUND_SYNC: bool = true;
