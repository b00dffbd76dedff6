/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {reason}")]
    Parse { reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
