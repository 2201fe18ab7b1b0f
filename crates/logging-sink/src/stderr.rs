//! The reference sink: locked whole-line writes to standard error.

use std::io::{self, Write as _};
use std::sync::Mutex;

use core::Severity;

use crate::record::Record;
use crate::sink::Sink;

/// Sink that writes rendered lines to the process's standard error stream.
///
/// A private lock serializes whole-line writes so that concurrent log calls
/// never interleave partial lines on the shared file descriptor. The
/// minimum-severity threshold is an explicit construction-time knob; the
/// default accepts everything at `Info` or above.
#[derive(Debug)]
pub struct StderrSink {
    lock: Mutex<()>,
    min_severity: Severity,
}

impl StderrSink {
    /// Creates a stderr sink accepting every severity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_severity(Severity::Info)
    }

    /// Creates a stderr sink that drops records below `min_severity`.
    #[must_use]
    pub fn with_min_severity(min_severity: Severity) -> Self {
        Self {
            lock: Mutex::new(()),
            min_severity,
        }
    }

    /// Returns the configured minimum severity.
    #[must_use]
    pub const fn min_severity(&self) -> Severity {
        self.min_severity
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StderrSink {
    fn enabled(&self, record: &Record) -> bool {
        record.severity >= self.min_severity
    }

    fn emit(&self, _record: &Record, line: &[u8]) -> io::Result<usize> {
        let _guard = self.lock.lock().expect("stderr sink mutex poisoned");

        let mut stderr = io::stderr().lock();
        stderr.write_all(line)?;

        Ok(line.len())
    }
}
