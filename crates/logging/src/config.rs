//! Initialization-time configuration for the logging engine.

use core::Severity;

/// Configuration handed to [`Logger::new`](crate::Logger::new) exactly once.
///
/// This covers the default sink set only; additional sinks are registered
/// through [`Logger::builder`](crate::Logger::builder). There is no file or
/// environment based loading here: the surrounding application owns how a
/// configuration comes to exist.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Initial verbosity threshold consulted by the `v(level)` gate.
    pub verbosity: i64,
    /// Whether to register the standard-error sink.
    pub stderr: bool,
    /// Minimum severity accepted by the standard-error sink.
    pub stderr_min_severity: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            stderr: true,
            stderr_min_severity: Severity::Info,
        }
    }
}

impl LogConfig {
    /// Returns the default configuration with the given verbosity threshold.
    #[must_use]
    pub fn with_verbosity(verbosity: i64) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }
}
