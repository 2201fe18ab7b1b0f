//! The logging engine: severity entry points, record capture, and fatal
//! termination.

use std::fmt;
use std::panic::Location;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use core::{ExitCode, Pool, Severity};
use logging_sink::{Arg, Body, Record, Sink, SinkSet, StderrSink};
use time::OffsetDateTime;

use crate::caller;
use crate::config::LogConfig;
use crate::verbose::Verbose;

/// Idle call records retained between bursts of logging.
const MAX_IDLE_RECORDS: usize = 8;

/// A leveled logging engine.
///
/// An engine owns its sink registry, its verbosity threshold, and a pool of
/// call records. Construct one per process through [`Logger::new`] (or
/// [`Logger::builder`] for a custom sink set) and share it by reference;
/// every method takes `&self` and is safe to call from any thread. Tests
/// construct a fresh engine per test instead of relying on shared process
/// state.
///
/// The sink registry is fixed once the engine is built. Only the verbosity
/// threshold can change afterwards, through [`set_verbosity`](Self::set_verbosity).
pub struct Logger {
    sinks: SinkSet,
    verbosity: AtomicI64,
    records: Arc<Pool<Record>>,
}

/// Builder for a [`Logger`] with a custom sink set.
pub struct LoggerBuilder {
    sinks: Vec<Box<dyn Sink>>,
    verbosity: i64,
}

impl LoggerBuilder {
    /// Sets the initial verbosity threshold.
    #[must_use]
    pub fn verbosity(mut self, level: i64) -> Self {
        self.verbosity = level;
        self
    }

    /// Appends a sink to the registry.
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Finalizes the registry and builds the engine.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            sinks: SinkSet::new(self.sinks),
            verbosity: AtomicI64::new(self.verbosity),
            records: Arc::new(Pool::new(MAX_IDLE_RECORDS)),
        }
    }
}

impl Logger {
    /// Initializes an engine from a [`LogConfig`].
    ///
    /// This is the single initialization boundary: it registers the default
    /// sink set (the standard-error sink, unless disabled) and fixes the
    /// registry for the lifetime of the engine.
    #[must_use]
    pub fn new(config: LogConfig) -> Self {
        let mut builder = Self::builder().verbosity(config.verbosity);
        if config.stderr {
            builder = builder.sink(Box::new(StderrSink::with_min_severity(
                config.stderr_min_severity,
            )));
        }
        builder.build()
    }

    /// Returns a builder with an empty sink registry and verbosity 0.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            sinks: Vec::new(),
            verbosity: 0,
        }
    }

    /// Returns the current verbosity threshold.
    #[must_use]
    pub fn verbosity(&self) -> i64 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Updates the verbosity threshold.
    ///
    /// Existing [`Verbose`] handles observe the new threshold the next time
    /// they are evaluated; output already dispatched is unaffected.
    pub fn set_verbosity(&self, level: i64) {
        self.verbosity.store(level, Ordering::Relaxed);
    }

    /// Reports whether the verbosity threshold is at least `level` and
    /// returns a gate handle exposing Info-severity logging operations.
    ///
    /// One may write either
    ///
    /// ```text
    /// if logger.v(2).is_enabled() { log_info!(logger, expensive()); }
    /// ```
    ///
    /// or
    ///
    /// ```text
    /// logger.v(2).info(&[expensive().to_arg()]);
    /// ```
    ///
    /// The second form is shorter but the first is cheaper when logging is
    /// off, because it does not evaluate its arguments.
    #[must_use]
    pub fn v(&self, level: i64) -> Verbose<'_> {
        Verbose::new(self, level)
    }

    /// Logs to the Info level. Arguments join print-style; a newline is
    /// appended if missing.
    #[track_caller]
    pub fn info(&self, args: &[Arg<'_>]) {
        self.log(Location::caller(), 0, Severity::Info, &Body::Print(args));
    }

    /// Logs to the Info level. Arguments join println-style.
    #[track_caller]
    pub fn infoln(&self, args: &[Arg<'_>]) {
        self.log(Location::caller(), 0, Severity::Info, &Body::Println(args));
    }

    /// Logs to the Info level with an explicit format produced by
    /// `format_args!`.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Location::caller(), 0, Severity::Info, &Body::Formatted(args));
    }

    /// Acts as [`info`](Self::info) but attributes the line `depth` stack
    /// frames above the caller. Depth 0 is the caller itself.
    #[track_caller]
    pub fn info_depth(&self, depth: usize, args: &[Arg<'_>]) {
        self.log(Location::caller(), depth, Severity::Info, &Body::Print(args));
    }

    /// Acts as [`infof`](Self::infof) with depth-adjusted attribution.
    #[track_caller]
    pub fn info_depthf(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.log(
            Location::caller(),
            depth,
            Severity::Info,
            &Body::Formatted(args),
        );
    }

    /// Logs to the Warning level, print-style.
    #[track_caller]
    pub fn warning(&self, args: &[Arg<'_>]) {
        self.log(Location::caller(), 0, Severity::Warning, &Body::Print(args));
    }

    /// Logs to the Warning level, println-style.
    #[track_caller]
    pub fn warningln(&self, args: &[Arg<'_>]) {
        self.log(
            Location::caller(),
            0,
            Severity::Warning,
            &Body::Println(args),
        );
    }

    /// Logs to the Warning level with an explicit format.
    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log(
            Location::caller(),
            0,
            Severity::Warning,
            &Body::Formatted(args),
        );
    }

    /// Acts as [`warning`](Self::warning) with depth-adjusted attribution.
    #[track_caller]
    pub fn warning_depth(&self, depth: usize, args: &[Arg<'_>]) {
        self.log(
            Location::caller(),
            depth,
            Severity::Warning,
            &Body::Print(args),
        );
    }

    /// Acts as [`warningf`](Self::warningf) with depth-adjusted attribution.
    #[track_caller]
    pub fn warning_depthf(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.log(
            Location::caller(),
            depth,
            Severity::Warning,
            &Body::Formatted(args),
        );
    }

    /// Logs to the Error level, print-style.
    #[track_caller]
    pub fn error(&self, args: &[Arg<'_>]) {
        self.log(Location::caller(), 0, Severity::Error, &Body::Print(args));
    }

    /// Logs to the Error level, println-style.
    #[track_caller]
    pub fn errorln(&self, args: &[Arg<'_>]) {
        self.log(Location::caller(), 0, Severity::Error, &Body::Println(args));
    }

    /// Logs to the Error level with an explicit format.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(
            Location::caller(),
            0,
            Severity::Error,
            &Body::Formatted(args),
        );
    }

    /// Acts as [`error`](Self::error) with depth-adjusted attribution.
    #[track_caller]
    pub fn error_depth(&self, depth: usize, args: &[Arg<'_>]) {
        self.log(
            Location::caller(),
            depth,
            Severity::Error,
            &Body::Print(args),
        );
    }

    /// Acts as [`errorf`](Self::errorf) with depth-adjusted attribution.
    #[track_caller]
    pub fn error_depthf(&self, depth: usize, args: fmt::Arguments<'_>) {
        self.log(
            Location::caller(),
            depth,
            Severity::Error,
            &Body::Formatted(args),
        );
    }

    /// Logs to the Fatal level, print-style, then terminates the process
    /// with [`ExitCode::Fatal`].
    ///
    /// Dispatch always runs, even when no sink is enabled, so a Fatal record
    /// is never silently dropped by sink configuration alone.
    #[track_caller]
    pub fn fatal(&self, args: &[Arg<'_>]) -> ! {
        self.log(Location::caller(), 0, Severity::Fatal, &Body::Print(args));
        Self::exit_fatal()
    }

    /// Logs to the Fatal level, println-style, then terminates the process.
    #[track_caller]
    pub fn fatalln(&self, args: &[Arg<'_>]) -> ! {
        self.log(Location::caller(), 0, Severity::Fatal, &Body::Println(args));
        Self::exit_fatal()
    }

    /// Logs to the Fatal level with an explicit format, then terminates the
    /// process.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(
            Location::caller(),
            0,
            Severity::Fatal,
            &Body::Formatted(args),
        );
        Self::exit_fatal()
    }

    /// Acts as [`fatal`](Self::fatal) with depth-adjusted attribution.
    #[track_caller]
    pub fn fatal_depth(&self, depth: usize, args: &[Arg<'_>]) -> ! {
        self.log(
            Location::caller(),
            depth,
            Severity::Fatal,
            &Body::Print(args),
        );
        Self::exit_fatal()
    }

    /// Acts as [`fatalf`](Self::fatalf) with depth-adjusted attribution.
    #[track_caller]
    pub fn fatal_depthf(&self, depth: usize, args: fmt::Arguments<'_>) -> ! {
        self.log(
            Location::caller(),
            depth,
            Severity::Fatal,
            &Body::Formatted(args),
        );
        Self::exit_fatal()
    }

    /// Captures a record, dispatches it, and resolves sink failures.
    ///
    /// Termination for Fatal severity deliberately does not live here: the
    /// Fatal entry points exit after this returns, keeping every non-Fatal
    /// path provably termination-free.
    pub(crate) fn log(
        &self,
        anchor: &'static Location<'static>,
        depth: usize,
        severity: Severity,
        body: &Body<'_>,
    ) {
        // Take the time right at the beginning.
        let now = current_time();
        let site = caller::resolve(anchor, depth);

        let mut record = Pool::acquire(Arc::clone(&self.records));
        record.time = now;
        record.file.clear();
        record.file.push_str(&site.file);
        record.line = site.line;
        record.depth = depth;
        record.severity = severity;
        record.thread = thread_id();

        if let Err(error) = self.sinks.dispatch(&record, body) {
            let _ = self.sinks.dispatch(
                &record,
                &Body::Formatted(format_args!(
                    "logging: exiting because of sink error: {error}"
                )),
            );
            process::exit(ExitCode::LoggingError.as_i32());
        }
    }

    fn exit_fatal() -> ! {
        process::exit(ExitCode::Fatal.as_i32())
    }
}

fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Returns a per-thread identifier, resolved once per thread.
fn thread_id() -> i64 {
    thread_local! {
        static THREAD_ID: i64 = lookup_thread_id();
    }
    THREAD_ID.with(|id| *id)
}

#[cfg(target_os = "linux")]
fn lookup_thread_id() -> i64 {
    i64::from(rustix::thread::gettid().as_raw_nonzero().get())
}

#[cfg(all(unix, not(target_os = "linux")))]
fn lookup_thread_id() -> i64 {
    i64::from(rustix::process::getpid().as_raw_nonzero().get())
}

#[cfg(not(unix))]
fn lookup_thread_id() -> i64 {
    i64::from(std::process::id())
}
