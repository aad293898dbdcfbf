use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tracing::debug;

use super::{SpeechError, SpeechRecognizer};

struct CaptureWork {
    generation: u64,
}

/// Outcome of one capture attempt, tagged with the generation it was
/// submitted under.
pub struct CaptureResult {
    pub generation: u64,
    pub outcome: Result<String, SpeechError>,
}

/// Runs a `SpeechRecognizer` on a dedicated thread so its blocking capture
/// never stalls the UI event loop.
///
/// The UI submits work, keeps refreshing, and polls `try_recv` on its next
/// cycles. A generation counter invalidates in-flight captures: results
/// whose generation no longer matches are dropped, before and after the
/// blocking call.
pub struct SpeechWorker {
    work_tx: mpsc::Sender<CaptureWork>,
    result_rx: Mutex<mpsc::Receiver<CaptureResult>>,
    generation: Arc<AtomicU64>,
}

impl SpeechWorker {
    pub fn spawn(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<CaptureWork>();
        let (result_tx, result_rx) = mpsc::channel::<CaptureResult>();

        {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("thesaurus-speech".into())
                .spawn(move || capture_worker(work_rx, result_tx, generation, recognizer))
                .expect("failed to spawn speech worker");
        }

        Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            generation,
        }
    }

    /// Queue one capture attempt. Returns the generation the result will
    /// carry.
    pub fn submit_capture(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.work_tx.send(CaptureWork { generation });
        generation
    }

    /// Discard any in-flight capture.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Non-blocking poll for a finished capture; call from the UI refresh
    /// cycle.
    pub fn try_recv(&self) -> Option<CaptureResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

fn capture_worker(
    rx: mpsc::Receiver<CaptureWork>,
    tx: mpsc::Sender<CaptureResult>,
    generation: Arc<AtomicU64>,
    mut recognizer: Box<dyn SpeechRecognizer>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple attempts queued, only the latest matters
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        // Check staleness before the blocking call
        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        let outcome = recognizer.capture();
        debug!(
            generation = latest.generation,
            ok = outcome.is_ok(),
            "speech capture finished"
        );

        // And after: the capture may have taken seconds
        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        let _ = tx.send(CaptureResult {
            generation: latest.generation,
            outcome,
        });
    }
}
