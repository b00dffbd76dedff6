/// Profanity detection and removal.
pub trait IProfanityFilter: Send + Sync {
    fn contains_profanity(&self, text: &str) -> bool;

    /// Return `text` with profane words removed.
    fn strip(&self, text: &str) -> String;
}
