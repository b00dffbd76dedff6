//! Lightweight default linguistic analyzer.
//!
//! Regex tokenization plus suffix and capitalization heuristics. Good enough
//! to bias scoring toward nouns when no real tagger is available.

use std::collections::HashSet;
use std::sync::LazyLock;

use interest_core::models::{EntityKind, PartOfSpeech, TokenClass};
use interest_core::traits::ILinguisticAnalyzer;
use regex::Regex;

static TOKEN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*").ok());

static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
    ]
    .into_iter()
    .collect()
});

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ology", "ics", "ery",
    "age", "ance", "ence", "ware",
];
const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "less"];
const PLACE_PREPOSITIONS: &[&str] = &["in", "at", "to", "from", "near", "visit", "visiting"];
const PERSON_PREPOSITIONS: &[&str] = &["with", "and", "by", "met", "call", "called"];

/// Default [`ILinguisticAnalyzer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ILinguisticAnalyzer for HeuristicAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match TOKEN_RE.as_ref() {
            Some(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
            None => text.split_whitespace().map(String::from).collect(),
        }
    }

    fn classify(&self, token: &str, context: &str) -> TokenClass {
        let lower = token.to_lowercase();
        if PRONOUNS.contains(lower.as_str()) {
            return TokenClass::new(PartOfSpeech::Pronoun, None);
        }

        if starts_uppercase(token) {
            if let Some(previous) = previous_word(token, context) {
                let prev = previous.to_lowercase();
                let kind = if PLACE_PREPOSITIONS.contains(&prev.as_str()) {
                    EntityKind::Place
                } else if PERSON_PREPOSITIONS.contains(&prev.as_str()) {
                    EntityKind::Person
                } else {
                    EntityKind::Organization
                };
                if !ends_sentence(previous) {
                    return TokenClass::new(PartOfSpeech::Noun, Some(kind));
                }
            }
        }

        if lower.ends_with("ly") {
            return TokenClass::new(PartOfSpeech::Adverb, None);
        }
        if lower.ends_with("ing") || lower.ends_with("ed") {
            return TokenClass::new(PartOfSpeech::Verb, None);
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return TokenClass::new(PartOfSpeech::Adjective, None);
        }
        if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s) && lower.len() > s.len()) {
            return TokenClass::new(PartOfSpeech::Noun, None);
        }
        TokenClass::other()
    }
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// The whitespace-separated word immediately before the first occurrence of
/// `token` in `context`, punctuation included.
fn previous_word<'a>(token: &str, context: &'a str) -> Option<&'a str> {
    let pos = context.find(token)?;
    context[..pos].split_whitespace().next_back()
}

fn ends_sentence(word: &str) -> bool {
    word.ends_with(['.', '!', '?'])
}
