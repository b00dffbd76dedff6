/// Key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("read failed for key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt value under key {key}: {details}")]
    CorruptValue { key: String, details: String },
}
