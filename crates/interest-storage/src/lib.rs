//! # interest-storage
//!
//! [`IKeyValueStorage`](interest_core::traits::IKeyValueStorage) implementations:
//! a SQLite-backed store for durable per-user state and a `HashMap`-backed
//! store for embedding and tests.

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::SqliteKeyValueStore;
pub use memory::MemoryKeyValueStore;

use interest_core::errors::{InterestError, StorageError};

/// Wrap a SQLite failure message in the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> InterestError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
