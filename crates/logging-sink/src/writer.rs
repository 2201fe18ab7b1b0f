//! Generic locked sink over any writer, and its file-backed variant.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use core::Severity;

use crate::record::Record;
use crate::sink::Sink;

/// Sink that writes rendered lines to an arbitrary [`Write`] target.
///
/// The writer sits behind a mutex so that concurrent log calls emit whole
/// lines without interleaving. Like the stderr sink, the minimum-severity
/// threshold is a construction-time knob defaulting to `Info`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    min_severity: Severity,
}

impl<W: Write + Send> WriterSink<W> {
    /// Creates a sink over `writer` accepting every severity.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_min_severity(writer, Severity::Info)
    }

    /// Creates a sink over `writer` that drops records below `min_severity`.
    #[must_use]
    pub fn with_min_severity(writer: W, min_severity: Severity) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_severity,
        }
    }

    /// Returns the configured minimum severity.
    #[must_use]
    pub const fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().expect("writer sink mutex poisoned")
    }
}

impl WriterSink<File> {
    /// Opens (creating if necessary) and appends to a log file at `path`.
    pub fn file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

/// File-backed sink: a [`WriterSink`] over an append-mode [`File`].
pub type FileSink = WriterSink<File>;

impl<W: Write + Send> Sink for WriterSink<W> {
    fn enabled(&self, record: &Record) -> bool {
        record.severity >= self.min_severity
    }

    fn emit(&self, _record: &Record, line: &[u8]) -> io::Result<usize> {
        let mut writer = self.writer.lock().expect("writer sink mutex poisoned");
        writer.write_all(line)?;
        Ok(line.len())
    }
}
