use serde::Serialize;

use crate::db::{PartOfSpeech, WordRecord};

/// Where a lookup query originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    Typed,
    Spoken,
}

/// One user-initiated lookup. Presentation layers build one of these per
/// action instead of sharing mutable session state with the engine.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub query: String,
    pub source: QuerySource,
}

impl LookupRequest {
    pub fn typed(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            source: QuerySource::Typed,
        }
    }

    pub fn spoken(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            source: QuerySource::Spoken,
        }
    }
}

/// Render-facing projection of a `WordRecord`.
#[derive(Debug, Clone, Serialize)]
pub struct WordView {
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: PartOfSpeech,
    pub definition: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub examples: Vec<String>,
}

impl WordView {
    pub fn from_record(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            phonetic: format!("/{}/", record.word),
            part_of_speech: record.part_of_speech,
            definition: record.definition.clone(),
            synonyms: record.synonyms.iter().cloned().collect(),
            antonyms: record.antonyms.iter().cloned().collect(),
            examples: record.examples.clone(),
        }
    }

    /// Plain-text rendering for terminal consumers.
    pub fn render_plain(&self) -> String {
        let mut out = format!(
            "{} {} ({})\n\nDefinition:\n  {}\n",
            self.word, self.phonetic, self.part_of_speech, self.definition
        );
        if !self.examples.is_empty() {
            out.push_str("\nExamples:\n");
            for (i, example) in self.examples.iter().enumerate() {
                out.push_str(&format!("  {}. \"{}\"\n", i + 1, example));
            }
        }
        if !self.synonyms.is_empty() {
            out.push_str(&format!("\nSynonyms: {}\n", self.synonyms.join(", ")));
        }
        if !self.antonyms.is_empty() {
            out.push_str(&format!("Antonyms: {}\n", self.antonyms.join(", ")));
        }
        out
    }
}

/// Result of resolving a query: a matched view, or a user-facing not-found.
/// NotFound is a value, never an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum LookupOutcome {
    Match(WordView),
    NotFound { query: String },
}

impl LookupOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, LookupOutcome::Match(_))
    }
}
