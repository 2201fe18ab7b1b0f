#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` is the back half of the logging engine: the per-call
//! [`Record`] metadata, the fixed-format line renderer, and the pluggable
//! [`Sink`] destinations a rendered line fans out to. The front half (entry
//! points, caller capture, verbosity gating) lives in the `logging` crate.
//!
//! # Design
//!
//! One rendered line is produced per log call and handed synchronously to
//! every sink whose [`Sink::enabled`] predicate accepts the record's
//! metadata. Rendering goes through a pooled buffer so steady-state logging
//! allocates nothing; the [`Body`] type funnels printf-style, print-style,
//! and println-style call forms through a single substitution step.
//!
//! # Invariants
//!
//! - Rendered lines are newline-terminated and never exceed
//!   [`MAX_LOG_LINE_LEN`] bytes.
//! - Sinks treat the record and line as borrowed, call-scoped data.
//! - Registry membership never changes after construction, so fan-out
//!   traversal requires no locks; each sink serializes its own device.
//!
//! # Errors
//!
//! [`Sink::emit`] surfaces [`std::io::Error`] values from the underlying
//! device. An emission error is deliberately severe: the engine above treats
//! it as grounds for process termination rather than propagating it through
//! ordinary error plumbing.

pub mod format;
pub mod memory;
pub mod record;
pub mod sink;
pub mod stderr;
pub mod writer;

pub use format::{Arg, Body, MAX_LOG_LINE_LEN, ToArg, render};
pub use memory::MemorySink;
pub use record::{Record, UNKNOWN_FILE, UNKNOWN_LINE};
pub use sink::{Sink, SinkSet};
pub use stderr::StderrSink;
pub use writer::{FileSink, WriterSink};
