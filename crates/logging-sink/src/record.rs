//! Per-call metadata describing one emitted log line.

use core::Severity;
use time::OffsetDateTime;

/// File name recorded when caller resolution fails.
pub const UNKNOWN_FILE: &str = "???";

/// Line number recorded when caller resolution fails.
pub const UNKNOWN_LINE: u32 = 1;

/// Metadata about a single logging call.
///
/// A record is acquired from a pool at the start of a log call, fully
/// populated before formatting, handed to every enabled sink, and returned to
/// the pool as soon as the call completes. Sinks must treat the record as
/// borrowed, read-only, call-scoped data: the same instance is reused by
/// later calls, so retaining it past `emit` would observe unrelated contents.
///
/// Every field is unconditionally rewritten during capture, so a recycled
/// record never leaks values from a previous call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Wall-clock time at which the logging call was made.
    pub time: OffsetDateTime,
    /// Basename of the source file containing the call site. Directory
    /// components are stripped during capture.
    pub file: String,
    /// Line offset within the source file.
    pub line: u32,
    /// Number of stack frames skipped when resolving the call site, so
    /// wrapper functions can attribute lines to their callers.
    pub depth: usize,
    /// Severity of the logging call.
    pub severity: Severity,
    /// Thread identifier, or the process identifier on platforms without a
    /// usable thread id.
    pub thread: i64,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            time: OffsetDateTime::UNIX_EPOCH,
            file: String::new(),
            line: 0,
            depth: 0,
            severity: Severity::Info,
            thread: 0,
        }
    }
}
