//! # interest-pool
//!
//! The user-scoped suggestion pool: a handful of known interests to ask the
//! user about, persisted write-through, seeded from a curated catalog, with
//! least-recently-used eviction and an unasked → asked → selected/unasked
//! lifecycle per entry.

pub mod catalog;
pub mod manager;
pub mod state;

pub use catalog::CURATED_INTERESTS;
pub use manager::SuggestionPoolManager;
pub use state::{AddOutcome, PoolState};
