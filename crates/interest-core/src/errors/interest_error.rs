use super::{ConfigError, StorageError, SyncError};

/// Top-level error type for the interest engine.
///
/// Caller-facing operations never surface these: collaborator failures are
/// logged and swallowed at the service boundary. Internal plumbing uses
/// [`InterestResult`] with `?`.
#[derive(Debug, thiserror::Error)]
pub enum InterestError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("profile sync error: {0}")]
    SyncError(#[from] SyncError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid phrase: {phrase:?}")]
    InvalidPhrase { phrase: String },

    #[error("lock poisoned: {component}")]
    LockPoisoned { component: String },
}

/// Convenience alias used throughout the workspace.
pub type InterestResult<T> = Result<T, InterestError>;
