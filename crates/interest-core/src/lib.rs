//! # interest-core
//!
//! Foundation crate for the interest engine.
//! Defines the shared data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InterestConfig;
pub use errors::{InterestError, InterestResult};
pub use models::{
    Candidate, ConversationStore, EntityKind, ExtractedPhrase, PartOfSpeech, SuggestionPoolEntry,
    TokenClass,
};
