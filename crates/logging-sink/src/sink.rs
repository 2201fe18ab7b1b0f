//! The sink capability set and the fan-out registry.

use std::io;
use std::sync::Arc;

use core::{Pool, Severity};

use crate::format::{self, Body};
use crate::record::Record;

/// We expect at most stderr, a file, and perhaps one more destination to be
/// emitting concurrently; idle buffers beyond that are dropped.
const MAX_IDLE_BUFFERS: usize = 4;

/// A consumer of pre-formatted log lines.
///
/// Implementations must not mutate or retain the record or line they are
/// given: both are call-scoped and reused by subsequent calls. Each sink is
/// individually responsible for serializing access to its own output device;
/// the registry never serializes across sinks.
pub trait Sink: Send + Sync {
    /// Reports whether this sink should output a line for the given record.
    ///
    /// When this returns `false`, [`SinkSet::dispatch`] will not call
    /// [`emit`](Self::emit) for the corresponding line.
    fn enabled(&self, record: &Record) -> bool;

    /// Writes one pre-formatted line (including the standard header and
    /// trailing newline) to the sink's output device.
    ///
    /// Returns the number of bytes occupied by the entry. An error returned
    /// here is severe enough that the logging engine should terminate the
    /// process: the engine treats an unwritable sink as an unrecoverable
    /// infrastructure failure.
    fn emit(&self, record: &Record, line: &[u8]) -> io::Result<usize>;
}

/// Ordered set of registered sinks, fixed after construction.
///
/// The registry is populated once when the engine is initialized and read
/// concurrently by all logging calls afterwards; since membership never
/// changes, traversal needs no synchronization. Rendered lines come from a
/// pool of reusable buffers owned by the set.
pub struct SinkSet {
    sinks: Vec<Box<dyn Sink>>,
    buffers: Arc<Pool<Vec<u8>>>,
}

impl SinkSet {
    /// Creates a registry over the given sinks.
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn Sink>>) -> Self {
        Self {
            sinks,
            buffers: Arc::new(Pool::with_hooks(MAX_IDLE_BUFFERS, Vec::new, Vec::clear)),
        }
    }

    /// Renders the record and message body once and fans the line out to
    /// every enabled sink.
    ///
    /// When no sink is enabled and the severity is not `Fatal`, the
    /// rendering cost is skipped entirely. `Fatal` records are always
    /// rendered and dispatched so that sink configuration alone can never
    /// silently drop them.
    ///
    /// Returns the maximum byte count reported by any sink, or the first
    /// error encountered. Remaining enabled sinks still receive the line
    /// after one of them fails.
    pub fn dispatch(&self, record: &Record, body: &Body<'_>) -> io::Result<usize> {
        let any_enabled = self.sinks.iter().any(|sink| sink.enabled(record));
        if !any_enabled && record.severity != Severity::Fatal {
            return Ok(0);
        }

        let mut buf = Pool::acquire(Arc::clone(&self.buffers));
        format::render(record, body, &mut buf);

        let mut written = 0;
        let mut first_error = None;

        for sink in &self.sinks {
            if !sink.enabled(record) {
                continue;
            }
            match sink.emit(record, &buf) {
                Ok(n) => written = written.max(n),
                Err(error) => {
                    if first_error.is_none() {
                        first_error = Some(error);
                    }
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(written),
        }
    }

    /// Returns the number of registered sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Reports whether the registry has no sinks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
