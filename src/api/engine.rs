use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::browse;
use crate::db::{DatabaseStats, DbError, WordDatabase};
use crate::matcher;
use crate::settings::settings;

use super::{LookupOutcome, LookupRequest, WordView};

/// Which data the engine is actually serving, so presentation layers can
/// warn the user about degraded modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// The configured database file loaded cleanly.
    Full,
    /// File missing; serving the embedded sample.
    Sample,
    /// File corrupt; serving an empty database.
    Empty,
}

/// Engine facade handed to presentation layers. Owns the read-only database
/// snapshot; every method is side-effect free.
pub struct Thesaurus {
    db: Arc<WordDatabase>,
    mode: DataMode,
    threshold: u8,
}

impl Thesaurus {
    /// Load the database at `path`, degrading instead of failing: a missing
    /// file falls back to the embedded sample, a corrupt file to an empty
    /// database. Never fatal.
    pub fn open(path: &Path) -> Self {
        match WordDatabase::load(path) {
            Ok(db) => Self::with_mode(db, DataMode::Full),
            Err(err @ DbError::Unavailable { .. }) => {
                warn!(%err, "database unavailable, falling back to sample data");
                Self::with_mode(WordDatabase::sample(), DataMode::Sample)
            }
            Err(err @ DbError::Corrupt { .. }) => {
                warn!(%err, "database corrupt, serving empty database");
                Self::with_mode(WordDatabase::empty(), DataMode::Empty)
            }
        }
    }

    /// Build directly from an in-memory database (tests, embedded callers).
    pub fn from_database(db: WordDatabase) -> Self {
        Self::with_mode(db, DataMode::Full)
    }

    fn with_mode(db: WordDatabase, mode: DataMode) -> Self {
        Self {
            db: Arc::new(db),
            mode,
            threshold: settings().matcher.threshold,
        }
    }

    pub fn data_mode(&self) -> DataMode {
        self.mode
    }

    pub fn database(&self) -> &WordDatabase {
        &self.db
    }

    /// Resolve a request to the closest known word.
    pub fn lookup(&self, request: &LookupRequest) -> LookupOutcome {
        self.resolve(&request.query)
    }

    /// Resolve free text to the closest known word at the configured
    /// threshold.
    pub fn resolve(&self, query: &str) -> LookupOutcome {
        match matcher::resolve(query, &self.db, self.threshold) {
            Some(record) => LookupOutcome::Match(WordView::from_record(record)),
            None => LookupOutcome::NotFound {
                query: query.trim().to_string(),
            },
        }
    }

    /// Words starting with `prefix`, ascending, capped by
    /// `browse.max_prefix_results` (0 = unlimited).
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<WordView> {
        let mut records = browse::find_by_prefix(prefix, &self.db);
        let cap = settings().browse.max_prefix_results;
        if cap > 0 {
            records.truncate(cap);
        }
        records.into_iter().map(WordView::from_record).collect()
    }

    /// Alphabetical browsing buckets keyed by uppercase first letter.
    pub fn letter_groups(&self) -> BTreeMap<char, Vec<WordView>> {
        browse::group_by_first_letter(&self.db)
            .into_iter()
            .map(|(letter, records)| {
                (
                    letter,
                    records.into_iter().map(WordView::from_record).collect(),
                )
            })
            .collect()
    }

    pub fn stats(&self) -> DatabaseStats {
        self.db.stats()
    }
}
