//! Static English stop-word set, extended with chat filler.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Articles, conjunctions, prepositions
        "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then", "than", "because",
        "as", "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down", "in", "out",
        "on", "off", "over", "under", "again", "further", "once", "while", "until", "since",
        // Pronouns and determiners
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
        "yours", "yourself", "he", "him", "his", "she", "her", "hers", "it", "its", "they",
        "them", "their", "theirs", "this", "that", "these", "those", "what", "which", "who",
        "whom", "whose", "all", "any", "both", "each", "every", "few", "more", "most", "other",
        "some", "such", "no", "not", "only", "own", "same", "too", "very", "just", "also",
        // Auxiliaries and common verbs
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
        "might", "must", "get", "got", "gets", "go", "going", "gone", "went", "make", "made",
        "know", "think", "want", "wanna", "gonna", "gotta", "like", "love", "feel", "say", "said",
        "see", "let", "lets", "need", "try", "take", "come",
        // Contractions
        "im", "i'm", "ive", "i've", "id", "i'd", "ill", "i'll", "dont", "don't", "doesnt",
        "doesn't", "didnt", "didn't", "cant", "can't", "wont", "won't", "isnt", "isn't",
        "it's", "thats", "that's", "youre", "you're", "theyre", "they're", "we're",
        // Adverbs and time words
        "here", "there", "when", "where", "why", "how", "now", "today", "tonight", "tomorrow",
        "yesterday", "always", "never", "sometimes", "often", "really", "actually", "maybe",
        "still", "even", "much", "many", "well", "back", "soon", "later", "already", "ever",
        // Chat filler
        "ok", "okay", "yes", "yeah", "yep", "nope", "lol", "lmao", "haha", "hahaha", "hehe",
        "hey", "hi", "hello", "thanks", "thank", "please", "oh", "um", "uh", "hmm", "omg",
        "btw", "idk", "tbh", "u", "ur", "thing", "things", "stuff", "lot", "lots", "kind",
        "sort", "way", "good", "great", "nice", "cool", "fun", "bad", "one", "two",
    ]
    .into_iter()
    .collect()
});

/// True when `word` (already lowercase) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_stopped() {
        for w in ["the", "i", "love", "every", "lol"] {
            assert!(is_stop_word(w), "{w} should be a stop word");
        }
    }

    #[test]
    fn topical_words_pass() {
        for w in ["football", "weekend", "guitar", "paris"] {
            assert!(!is_stop_word(w), "{w} should not be a stop word");
        }
    }
}
