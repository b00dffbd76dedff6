//! Span definitions per operation: message processing, feedback, pool access,
//! profile sync.

/// Create a message-processing span.
#[macro_export]
macro_rules! message_span {
    ($conversation_id:expr) => {
        tracing::info_span!("interest.message", conversation = %$conversation_id)
    };
}

/// Create a feedback span (`accept` or `reject`).
#[macro_export]
macro_rules! feedback_span {
    ($kind:expr, $conversation_id:expr, $phrase:expr) => {
        tracing::info_span!(
            "interest.feedback",
            kind = %$kind,
            conversation = %$conversation_id,
            phrase = %$phrase
        )
    };
}

/// Create a suggestion-pool span.
#[macro_export]
macro_rules! pool_span {
    ($operation:expr) => {
        tracing::debug_span!("interest.pool", operation = %$operation)
    };
}

/// Create a profile-sync span.
#[macro_export]
macro_rules! sync_span {
    ($user_id:expr, $tag_count:expr) => {
        tracing::info_span!("interest.sync", user = %$user_id, tags = $tag_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MESSAGE: &str = "interest.message";
    pub const FEEDBACK: &str = "interest.feedback";
    pub const POOL: &str = "interest.pool";
    pub const SYNC: &str = "interest.sync";
}
