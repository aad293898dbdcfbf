//! Speech-to-text adapter seam.
//!
//! The engine consumes speech capture only through the `SpeechRecognizer`
//! trait; microphone handling and the remote recognition API live in the
//! hosting application. `SpeechWorker` keeps the blocking capture call off
//! the UI thread.

mod worker;

pub use worker::{CaptureResult, SpeechWorker};

/// Capture failures, each surfaced as a distinct user message. All are
/// recoverable by retrying the action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    #[error("no speech detected before the timeout")]
    NoSpeechDetected,

    #[error("could not understand the audio")]
    Unintelligible,

    #[error("recognition service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// A blocking speech-capture backend with a bounded internal timeout.
/// One attempt per call; retry policy belongs to the user action.
pub trait SpeechRecognizer: Send {
    fn capture(&mut self) -> Result<String, SpeechError>;
}
