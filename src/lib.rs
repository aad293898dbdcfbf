//! Word-lookup engine: fuzzy nearest-word resolution, prefix search, and
//! alphabetical browsing over a curated, immutable word database.
//!
//! Presentation layers (web, desktop, CLI) consume the `api::Thesaurus`
//! facade; voice input reaches the matcher through the `speech` adapter
//! seam.

pub mod api;
pub mod browse;
pub mod db;
pub mod matcher;
pub mod settings;
pub mod speech;
pub mod trace_init;

pub use api::{DataMode, LookupOutcome, LookupRequest, QuerySource, Thesaurus, WordView};
pub use db::{DatabaseStats, DbError, PartOfSpeech, WordDatabase, WordRecord};
pub use matcher::{resolve, DEFAULT_THRESHOLD};
pub use speech::{SpeechError, SpeechRecognizer, SpeechWorker};
