use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag reported by the linguistic collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Other,
}

/// Named-entity kind, when the token is part of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Place,
    Organization,
}

/// Classification of a single token in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClass {
    pub part_of_speech: PartOfSpeech,
    pub entity_kind: Option<EntityKind>,
}

impl TokenClass {
    pub fn new(part_of_speech: PartOfSpeech, entity_kind: Option<EntityKind>) -> Self {
        Self {
            part_of_speech,
            entity_kind,
        }
    }

    pub fn other() -> Self {
        Self::new(PartOfSpeech::Other, None)
    }

    /// Nouns and named entities earn the extraction bonus.
    pub fn is_topical(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Noun || self.entity_kind.is_some()
    }
}
