//! In-memory capture sink for tests and embedders.

use std::io;
use std::sync::{Arc, Mutex};

use core::Severity;

use crate::record::Record;
use crate::sink::Sink;

/// Sink that captures rendered lines into shared memory.
///
/// Cloning the sink clones a handle to the same captured bytes, so a test can
/// register one clone with the engine and inspect the output through the
/// other after logging completes.
#[derive(Clone, Debug)]
pub struct MemorySink {
    captured: Arc<Mutex<Vec<u8>>>,
    min_severity: Severity,
}

impl MemorySink {
    /// Creates a capture sink accepting every severity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_severity(Severity::Info)
    }

    /// Creates a capture sink that drops records below `min_severity`.
    #[must_use]
    pub fn with_min_severity(min_severity: Severity) -> Self {
        Self {
            captured: Arc::new(Mutex::new(Vec::new())),
            min_severity,
        }
    }

    /// Returns a copy of everything captured so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.captured
            .lock()
            .expect("memory sink mutex poisoned")
            .clone()
    }

    /// Returns the captured bytes as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.captured
            .lock()
            .expect("memory sink mutex poisoned")
            .clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn enabled(&self, record: &Record) -> bool {
        record.severity >= self.min_severity
    }

    fn emit(&self, _record: &Record, line: &[u8]) -> io::Result<usize> {
        let mut captured = self.captured.lock().expect("memory sink mutex poisoned");
        captured.extend_from_slice(line);
        Ok(line.len())
    }
}
