//! Fuzzy nearest-word resolution.
//!
//! Scores the normalized query against every canonical word with normalized
//! Levenshtein similarity and accepts the best candidate at or above the
//! threshold. Deterministic: the database is an immutable sorted snapshot
//! and scoring has no state, so identical inputs always resolve identically.

use strsim::normalized_levenshtein;
use tracing::debug;

use crate::db::{WordDatabase, WordRecord};

/// Canonical acceptance threshold (0-100 scale).
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Canonical form used for scoring and keys: trimmed, lowercase.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Similarity between two strings on a 0-100 scale.
pub fn similarity(a: &str, b: &str) -> u8 {
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Resolve free text to the closest known record, or `None` if nothing
/// scores at or above `threshold`.
///
/// Ties on the top score go to the first record in iteration order; records
/// are sorted by word, so that is the alphabetically first candidate. An
/// arbitrary but deterministic choice.
pub fn resolve<'a>(query: &str, db: &'a WordDatabase, threshold: u8) -> Option<&'a WordRecord> {
    let needle = normalize(query);
    if needle.is_empty() || db.is_empty() {
        return None;
    }

    let mut best: Option<(&WordRecord, u8)> = None;
    for record in db.records() {
        let score = similarity(&needle, &record.word);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((record, score));
        }
    }

    match best {
        Some((record, score)) if score >= threshold => {
            debug!(query = %needle, word = %record.word, score, "resolved");
            Some(record)
        }
        Some((_, score)) => {
            debug!(query = %needle, best_score = score, threshold, "no match");
            None
        }
        None => None,
    }
}
