//! Word database: the immutable snapshot of curated dictionary entries.
//!
//! `WordDatabase` is loaded wholesale from a UTF-8 JSON file at process
//! start and never mutated afterwards. Records are canonicalized and
//! validated at load so lookups never hit a malformed entry.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Embedded fallback database used when the real file is missing.
pub const SAMPLE_WORDS_JSON: &str = include_str!("sample_words.json");

/// Unified error type for word-database loading.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("word database unavailable: {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word database corrupt: {reason}")]
    Corrupt { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Unknown,
}

impl PartOfSpeech {
    /// Parse the dataset generator's label; anything unrecognized maps to
    /// `Unknown` rather than failing the load.
    pub fn from_label(label: &str) -> Self {
        match label {
            "noun" => PartOfSpeech::Noun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            _ => PartOfSpeech::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for PartOfSpeech {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(PartOfSpeech::from_label(&label))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A single dictionary entry. `word` is the lowercase canonical lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub definition: String,
    pub part_of_speech: PartOfSpeech,
    pub synonyms: BTreeSet<String>,
    pub antonyms: BTreeSet<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Read-only snapshot of all word records, sorted by canonical word.
#[derive(Debug)]
pub struct WordDatabase {
    records: Vec<WordRecord>,
}

impl WordDatabase {
    /// Load from a JSON file.
    ///
    /// Missing (or unreadable) file → `Unavailable`; unparseable content or
    /// failed validation → `Corrupt`. Degraded-data fallbacks live in the
    /// engine facade, not here.
    pub fn load(path: &Path) -> Result<Self, DbError> {
        let json = fs::read_to_string(path).map_err(|source| DbError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::from_json(&json)?;
        debug!(path = %path.display(), words = db.len(), "loaded word database");
        Ok(db)
    }

    /// Parse a JSON array of records, then canonicalize and validate.
    pub fn from_json(json: &str) -> Result<Self, DbError> {
        let records: Vec<WordRecord> = serde_json::from_str(json).map_err(|e| DbError::Corrupt {
            reason: e.to_string(),
        })?;
        Self::from_records(records)
    }

    /// Build a database from in-memory records.
    ///
    /// Canonicalizes each `word` (trim + lowercase), strips the word itself
    /// from its synonym/antonym sets, and sorts by word. Empty or duplicate
    /// canonical words fail the whole load: a partial database would mask
    /// generator bugs.
    pub fn from_records(records: Vec<WordRecord>) -> Result<Self, DbError> {
        let mut canonical = Vec::with_capacity(records.len());
        for (index, mut record) in records.into_iter().enumerate() {
            let word = record.word.trim().to_lowercase();
            if word.is_empty() {
                return Err(DbError::Corrupt {
                    reason: format!("record {index} has an empty word"),
                });
            }
            record.synonyms.remove(&word);
            record.antonyms.remove(&word);
            record.word = word;
            canonical.push(record);
        }

        canonical.sort_by(|a, b| a.word.cmp(&b.word));
        for pair in canonical.windows(2) {
            if pair[0].word == pair[1].word {
                return Err(DbError::Corrupt {
                    reason: format!("duplicate word '{}'", pair[0].word),
                });
            }
        }

        Ok(Self { records: canonical })
    }

    /// The embedded fallback database.
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_WORDS_JSON).expect("embedded sample database must be valid")
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All records, sorted ascending by canonical word.
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by canonical word.
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.records
            .binary_search_by(|r| r.word.as_str().cmp(word))
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn stats(&self) -> DatabaseStats {
        let mut part_of_speech: BTreeMap<PartOfSpeech, usize> = BTreeMap::new();
        let mut letters = BTreeSet::new();
        for record in &self.records {
            *part_of_speech.entry(record.part_of_speech).or_default() += 1;
            if let Some(first) = record.word.chars().next() {
                letters.insert(first);
            }
        }
        DatabaseStats {
            total_words: self.records.len(),
            letters_covered: letters.len(),
            part_of_speech,
        }
    }
}

/// Summary counts for the browsing UI's stats panel.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseStats {
    pub total_words: usize,
    pub letters_covered: usize,
    pub part_of_speech: BTreeMap<PartOfSpeech, usize>,
}
