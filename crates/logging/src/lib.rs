#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! A leveled, glog-flavoured logging engine. An explicit [`Logger`] instance
//! owns a registry of [`Sink`]s, a runtime-adjustable verbosity threshold,
//! and a pool of call records; the severity entry points capture a
//! timestamped, caller-attributed record, render it once into the standard
//! line format, and fan the bytes out to every enabled sink.
//!
//! # Design
//!
//! The engine is a value, not process-global state. Construct one with
//! [`Logger::new`] from a [`LogConfig`] (which registers the standard-error
//! sink by default) or with [`Logger::builder`] for a custom sink set, and
//! pass it by reference; everything takes `&self` and is thread-safe.
//!
//! Each severity offers three call conventions, mirrored by the `log_*!`
//! macros: print-style joining (`info`), println-style joining (`infoln`),
//! and an explicit format string (`infof`). `*_depth` variants attribute
//! the line to a caller further up the stack, for logging helpers that
//! should not name themselves.
//!
//! ```
//! use logging::{Logger, MemorySink, log_infoln};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(Box::new(sink.clone())).build();
//!
//! log_infoln!(logger, "checked", 3, "paths");
//! assert!(sink.text().ends_with("] checked 3 paths\n"));
//! ```
//!
//! # Fatal severity
//!
//! The Fatal entry points return `!`: they dispatch unconditionally (even
//! with every sink disabled) and then terminate the process with
//! [`ExitCode::Fatal`]. A sink write failure on any path terminates with
//! [`ExitCode::LoggingError`] after a best-effort diagnostic.
//!
//! # Verbosity
//!
//! [`Logger::v`] returns a [`Verbose`] gate handle. The handle re-reads the
//! engine threshold at every evaluation, so raising the threshold with
//! [`Logger::set_verbosity`] opens handles that are already in scope.

mod caller;
pub mod config;
pub mod logger;
mod macros;
pub mod verbose;

pub use config::LogConfig;
pub use logger::{Logger, LoggerBuilder};
pub use verbose::Verbose;

pub use core::{ExitCode, Severity};
pub use logging_sink::{
    Arg, Body, FileSink, MAX_LOG_LINE_LEN, MemorySink, Record, Sink, SinkSet, StderrSink, ToArg,
    WriterSink,
};
