use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn record(word: &str) -> WordRecord {
    WordRecord {
        word: word.to_string(),
        definition: format!("definition of {word}"),
        part_of_speech: PartOfSpeech::Noun,
        synonyms: BTreeSet::new(),
        antonyms: BTreeSet::new(),
        examples: Vec::new(),
    }
}

#[test]
fn load_missing_file_is_unavailable() {
    let err = WordDatabase::load(Path::new("/nonexistent/words.json")).unwrap_err();
    assert!(matches!(err, DbError::Unavailable { .. }));
}

#[test]
fn load_invalid_json_is_corrupt() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = WordDatabase::load(file.path()).unwrap_err();
    assert!(matches!(err, DbError::Corrupt { .. }));
}

#[test]
fn load_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"word":"Abate ","definition":"become less","part_of_speech":"verb",
            "synonyms":["subside"],"antonyms":[],"examples":["The storm abated."]}}]"#
    )
    .unwrap();
    let db = WordDatabase::load(file.path()).unwrap();
    assert_eq!(db.len(), 1);
    // canonicalized at load
    assert_eq!(db.records()[0].word, "abate");
    assert!(db.get("abate").is_some());
    assert!(db.get("Abate").is_none());
}

#[test]
fn missing_field_is_corrupt() {
    // no definition field
    let err = WordDatabase::from_json(r#"[{"word":"abate","part_of_speech":"verb"}]"#).unwrap_err();
    assert!(matches!(err, DbError::Corrupt { .. }));
}

#[test]
fn empty_word_is_corrupt() {
    let err = WordDatabase::from_records(vec![record("  ")]).unwrap_err();
    let DbError::Corrupt { reason } = err else {
        panic!("expected Corrupt");
    };
    assert!(reason.contains("empty word"));
}

#[test]
fn duplicate_word_is_corrupt() {
    let err = WordDatabase::from_records(vec![record("abate"), record("ABATE")]).unwrap_err();
    assert!(matches!(err, DbError::Corrupt { .. }));
}

#[test]
fn self_reference_stripped_from_synonyms_and_antonyms() {
    let mut r = record("Abate");
    r.synonyms = ["abate", "subside"].iter().map(|s| s.to_string()).collect();
    r.antonyms = ["abate", "intensify"].iter().map(|s| s.to_string()).collect();
    let db = WordDatabase::from_records(vec![r]).unwrap();
    let rec = db.get("abate").unwrap();
    assert!(!rec.synonyms.contains("abate"));
    assert!(rec.synonyms.contains("subside"));
    assert!(!rec.antonyms.contains("abate"));
}

#[test]
fn records_sorted_by_word() {
    let db =
        WordDatabase::from_records(vec![record("zebra"), record("abate"), record("candor")])
            .unwrap();
    let words: Vec<&str> = db.records().iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["abate", "candor", "zebra"]);
}

#[test]
fn unknown_part_of_speech_tolerated() {
    let db = WordDatabase::from_json(
        r#"[{"word":"blorp","definition":"x","part_of_speech":"interjection",
            "synonyms":[],"antonyms":[]}]"#,
    )
    .unwrap();
    assert_eq!(db.records()[0].part_of_speech, PartOfSpeech::Unknown);
}

#[test]
fn sample_database_is_valid() {
    let db = WordDatabase::sample();
    assert!(!db.is_empty());
    assert!(db.get("aberration").is_some());
}

#[test]
fn stats_counts() {
    let db = WordDatabase::sample();
    let stats = db.stats();
    assert_eq!(stats.total_words, db.len());
    assert_eq!(
        stats.part_of_speech.values().sum::<usize>(),
        stats.total_words
    );
    assert!(stats.letters_covered >= 1);
    assert!(stats.part_of_speech.contains_key(&PartOfSpeech::Noun));
}
