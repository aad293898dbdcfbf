//! Engine facade and the request/response types presentation layers consume.
//!
//! Web and desktop shells both talk to `Thesaurus`; per-action state travels
//! in `LookupRequest`/`LookupOutcome` values rather than shared session
//! globals.

mod engine;
mod types;


pub use engine::{DataMode, Thesaurus};
pub use types::{LookupOutcome, LookupRequest, QuerySource, WordView};
