//! Variadic front-end macros over the [`Logger`](crate::Logger) entry
//! points.
//!
//! The print-style methods take a slice of erased [`Arg`](crate::Arg)
//! values; these macros build that slice from a plain argument list so call
//! sites read like the format-free `print` family:
//!
//! ```text
//! log_info!(logger, "received", n, "bytes from", peer);
//! log_warningln!(logger, "retrying in", delay_secs);
//! log_errorf!(logger, "bind {addr}: {err}");
//! ```
//!
//! The `*f!` variants forward to `format_args!`, so the full formatting
//! syntax is available there.

/// Logs at Info severity, print-style.
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Info severity, println-style.
#[macro_export]
macro_rules! log_infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.infoln(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Info severity with a format string.
#[macro_export]
macro_rules! log_infof {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.infof(format_args!($fmt $(, $arg)*))
    };
}

/// Logs at Warning severity, print-style.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Warning severity, println-style.
#[macro_export]
macro_rules! log_warningln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warningln(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Warning severity with a format string.
#[macro_export]
macro_rules! log_warningf {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.warningf(format_args!($fmt $(, $arg)*))
    };
}

/// Logs at Error severity, print-style.
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Error severity, println-style.
#[macro_export]
macro_rules! log_errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.errorln(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Error severity with a format string.
#[macro_export]
macro_rules! log_errorf {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.errorf(format_args!($fmt $(, $arg)*))
    };
}

/// Logs at Fatal severity, print-style, then terminates the process.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Fatal severity, println-style, then terminates the process.
#[macro_export]
macro_rules! log_fatalln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatalln(&[$($crate::ToArg::to_arg(&$arg)),*])
    };
}

/// Logs at Fatal severity with a format string, then terminates the process.
#[macro_export]
macro_rules! log_fatalf {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.fatalf(format_args!($fmt $(, $arg)*))
    };
}
