mod config_error;
mod interest_error;
mod storage_error;
mod sync_error;

pub use config_error::ConfigError;
pub use interest_error::{InterestError, InterestResult};
pub use storage_error::StorageError;
pub use sync_error::SyncError;
