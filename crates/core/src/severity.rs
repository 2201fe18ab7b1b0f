//! Ordered severity levels for log records.

use std::fmt;
use std::str::FromStr;

/// Single-character display forms, indexed by severity discriminant.
///
/// The position of each byte matches the enum discriminant, so the prefix
/// character of a rendered line never has to be looked up through a match.
const SEVERITY_CHARS: &[u8; 4] = b"IWEF";

/// Severity at which a message can be logged.
///
/// The variants form a total order (`Info < Warning < Error < Fatal`). A sink
/// or verbosity gate configured with a threshold accepts a record when the
/// record's severity compares `>=` to that threshold. `Fatal` is terminal:
/// emitting at `Fatal` severity always proceeds to process termination
/// regardless of sink availability.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Informational message.
    Info = 0,
    /// Warning message.
    Warning = 1,
    /// Error message.
    Error = 2,
    /// Unrecoverable condition; logging at this severity terminates the
    /// process.
    Fatal = 3,
}

impl Severity {
    /// Returns the single byte written as the first byte of a rendered line.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        SEVERITY_CHARS[self as usize]
    }

    /// Returns the single-character display form (`'I'`, `'W'`, `'E'`, `'F'`).
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Returns the lowercase label used in configuration and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Reports whether this severity terminates the process when logged.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log severity: {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_totally_ordered() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn threshold_comparison_is_monotonic() {
        let all = [
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ];
        for (index, threshold) in all.iter().enumerate() {
            let accepted = all.iter().filter(|severity| *severity >= threshold).count();
            assert_eq!(accepted, all.len() - index);
        }
    }

    #[test]
    fn prefix_characters_are_positional() {
        assert_eq!(Severity::Info.as_char(), 'I');
        assert_eq!(Severity::Warning.as_char(), 'W');
        assert_eq!(Severity::Error.as_char(), 'E');
        assert_eq!(Severity::Fatal.as_char(), 'F');
    }

    #[test]
    fn as_byte_matches_as_char() {
        for severity in [
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert_eq!(severity.as_byte(), severity.as_char() as u8);
        }
    }

    #[test]
    fn parses_known_labels() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Fatal));
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("verbose".parse::<Severity>().is_err());
        assert!("INFO".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for severity in [
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn only_fatal_is_fatal() {
        assert!(Severity::Fatal.is_fatal());
        assert!(!Severity::Info.is_fatal());
        assert!(!Severity::Warning.is_fatal());
        assert!(!Severity::Error.is_fatal());
    }
}
