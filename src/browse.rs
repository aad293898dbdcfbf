//! Prefix search and alphabetical grouping for the browsing UI.
//!
//! Both are recomputed from the database on each call; at dictionary scale
//! a linear scan is cheaper than maintaining an index.

use std::collections::BTreeMap;

use crate::db::{WordDatabase, WordRecord};
use crate::matcher::normalize;

/// Records whose canonical word starts with the normalized prefix, in
/// ascending word order. Empty prefix or empty database yields an empty vec.
pub fn find_by_prefix<'a>(prefix: &str, db: &'a WordDatabase) -> Vec<&'a WordRecord> {
    let prefix = normalize(prefix);
    if prefix.is_empty() {
        return Vec::new();
    }
    // records are sorted at load, so the result is already ordered
    db.records()
        .iter()
        .filter(|r| r.word.starts_with(&prefix))
        .collect()
}

/// Partition the database by uppercase first letter of the canonical word.
/// Bucket contents stay in ascending word order.
pub fn group_by_first_letter(db: &WordDatabase) -> BTreeMap<char, Vec<&WordRecord>> {
    let mut groups: BTreeMap<char, Vec<&WordRecord>> = BTreeMap::new();
    for record in db.records() {
        // word is validated non-empty at load
        let Some(first) = record.word.chars().next() else {
            continue;
        };
        let key = first.to_uppercase().next().unwrap_or(first);
        groups.entry(key).or_default().push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{PartOfSpeech, WordDatabase, WordRecord};

    fn db(words: &[&str]) -> WordDatabase {
        let records = words
            .iter()
            .map(|w| WordRecord {
                word: w.to_string(),
                definition: String::from("d"),
                part_of_speech: PartOfSpeech::Noun,
                synonyms: Default::default(),
                antonyms: Default::default(),
                examples: Vec::new(),
            })
            .collect();
        WordDatabase::from_records(records).unwrap()
    }

    #[test]
    fn prefix_filters_and_sorts() {
        let db = db(&["aberration", "abate", "zebra"]);
        let words: Vec<&str> = find_by_prefix("ab", &db)
            .iter()
            .map(|r| r.word.as_str())
            .collect();
        assert_eq!(words, ["abate", "aberration"]);
    }

    #[test]
    fn prefix_is_case_insensitive() {
        let db = db(&["aberration", "zebra"]);
        assert_eq!(find_by_prefix("  AB", &db).len(), 1);
    }

    #[test]
    fn empty_prefix_yields_nothing() {
        let db = db(&["aberration"]);
        assert!(find_by_prefix("", &db).is_empty());
        assert!(find_by_prefix("   ", &db).is_empty());
    }

    #[test]
    fn empty_database_yields_nothing() {
        assert!(find_by_prefix("ab", &WordDatabase::empty()).is_empty());
    }

    #[test]
    fn no_match_yields_nothing() {
        let db = db(&["aberration"]);
        assert!(find_by_prefix("zz", &db).is_empty());
    }

    #[test]
    fn groups_partition_exactly() {
        let db = db(&["aberration", "abate", "candor", "zebra"]);
        let groups = group_by_first_letter(&db);

        let keys: Vec<char> = groups.keys().copied().collect();
        assert_eq!(keys, ['A', 'C', 'Z']);

        let total: usize = groups.values().map(|v| v.len()).sum();
        assert_eq!(total, db.len());

        let a_words: Vec<&str> = groups[&'A'].iter().map(|r| r.word.as_str()).collect();
        assert_eq!(a_words, ["abate", "aberration"]);
    }

    #[test]
    fn empty_database_has_no_groups() {
        assert!(group_by_first_letter(&WordDatabase::empty()).is_empty());
    }
}
