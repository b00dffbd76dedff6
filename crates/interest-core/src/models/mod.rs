mod candidate;
mod conversation;
mod extracted_phrase;
mod phrase;
mod pool_entry;
mod token_class;

pub use candidate::Candidate;
pub use conversation::ConversationStore;
pub use extracted_phrase::ExtractedPhrase;
pub use phrase::{normalize_phrase, same_phrase};
pub use pool_entry::SuggestionPoolEntry;
pub use token_class::{EntityKind, PartOfSpeech, TokenClass};
