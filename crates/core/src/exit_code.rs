//! Distinguished process exit codes used by the logging engine.
//!
//! The engine terminates the process in exactly two situations: a registered
//! sink failed while emitting a line, and a Fatal-severity log call completed
//! its dispatch. Each situation has its own code so that crash tooling can
//! tell them apart from ordinary application exits.

use std::fmt;

/// Exit codes the logging engine hands to [`std::process::exit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,

    /// A registered sink reported an unrecoverable error while a line was
    /// being emitted. An engine that cannot guarantee delivery of subsequent
    /// Fatal records cannot meet the process's crash-reporting obligations,
    /// so the failure terminates the process.
    LoggingError = 5,

    /// A Fatal-severity log call completed its dispatch.
    Fatal = 255,
}

impl ExitCode {
    /// Returns the numeric value passed to [`std::process::exit`].
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description of the exit condition.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::LoggingError => "error in logging",
            Self::Fatal => "fatal log message",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
