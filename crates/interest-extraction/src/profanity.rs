use interest_core::traits::IProfanityFilter;
use regex::Regex;

/// Built-in word list used by [`WordListProfanityFilter::default`].
const DEFAULT_WORDS: &[&str] = &[
    "damn", "dammit", "hell", "crap", "shit", "shitty", "fuck", "fucking", "fucker", "bitch",
    "bastard", "asshole", "dick", "piss", "pissed", "bollocks", "wanker", "twat", "cunt",
];

/// Case-insensitive whole-word profanity filter.
pub struct WordListProfanityFilter {
    /// `None` when the word list is empty.
    pattern: Option<Regex>,
}

impl WordListProfanityFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(&w))
            .collect();
        let pattern = if alternatives.is_empty() {
            None
        } else {
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).ok()
        };
        Self { pattern }
    }
}

impl Default for WordListProfanityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

impl IProfanityFilter for WordListProfanityFilter {
    fn contains_profanity(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }

    fn strip(&self, text: &str) -> String {
        match &self.pattern {
            Some(re) => re
                .replace_all(text, "")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
            None => text.to_string(),
        }
    }
}
