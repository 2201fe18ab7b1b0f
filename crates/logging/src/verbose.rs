//! Verbosity-gated logging handles.

use std::fmt;
use std::panic::Location;

use core::Severity;
use logging_sink::{Arg, Body};

use crate::logger::Logger;

/// A gate handle returned by [`Logger::v`].
///
/// The handle stores the requested level, not a frozen decision: every
/// evaluation re-reads the engine's current verbosity threshold, so a handle
/// held across [`Logger::set_verbosity`](Logger::set_verbosity) observes the
/// new threshold.
///
/// All logging methods on the handle emit at Info severity and are no-ops
/// while the gate is closed.
#[derive(Clone, Copy)]
pub struct Verbose<'a> {
    logger: &'a Logger,
    level: i64,
}

impl<'a> Verbose<'a> {
    pub(crate) fn new(logger: &'a Logger, level: i64) -> Self {
        Self { logger, level }
    }

    /// Reports whether the engine's verbosity threshold is at least the
    /// handle's level right now.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.logger.verbosity() >= self.level
    }

    /// Returns the level this handle gates on.
    #[must_use]
    pub fn level(&self) -> i64 {
        self.level
    }

    /// Logs at Info severity, print-style, if the gate is open.
    #[track_caller]
    pub fn info(&self, args: &[Arg<'_>]) {
        if self.is_enabled() {
            self.logger
                .log(Location::caller(), 0, Severity::Info, &Body::Print(args));
        }
    }

    /// Logs at Info severity, println-style, if the gate is open.
    #[track_caller]
    pub fn infoln(&self, args: &[Arg<'_>]) {
        if self.is_enabled() {
            self.logger
                .log(Location::caller(), 0, Severity::Info, &Body::Println(args));
        }
    }

    /// Logs at Info severity with an explicit format, if the gate is open.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        if self.is_enabled() {
            self.logger.log(
                Location::caller(),
                0,
                Severity::Info,
                &Body::Formatted(args),
            );
        }
    }

    /// Acts as [`info`](Self::info) with depth-adjusted attribution.
    #[track_caller]
    pub fn info_depth(&self, depth: usize, args: &[Arg<'_>]) {
        if self.is_enabled() {
            self.logger
                .log(Location::caller(), depth, Severity::Info, &Body::Print(args));
        }
    }

    /// Acts as [`infof`](Self::infof) with depth-adjusted attribution.
    #[track_caller]
    pub fn info_depthf(&self, depth: usize, args: fmt::Arguments<'_>) {
        if self.is_enabled() {
            self.logger.log(
                Location::caller(),
                depth,
                Severity::Info,
                &Body::Formatted(args),
            );
        }
    }
}

impl From<Verbose<'_>> for bool {
    fn from(verbose: Verbose<'_>) -> Self {
        verbose.is_enabled()
    }
}

impl fmt::Debug for Verbose<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verbose")
            .field("level", &self.level)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
