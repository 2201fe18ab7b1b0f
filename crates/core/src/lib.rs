#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/core/src/lib.rs
//!
//! # Overview
//!
//! `core` holds the leaf types shared by the logging workspace: the ordered
//! [`Severity`] model, the distinguished process [`ExitCode`] values, and the
//! generic [`Pool`] used to recycle call records and format buffers on the hot
//! logging path.
//!
//! # Design
//!
//! Everything here is dependency-free with respect to the other workspace
//! members so that both `logging-sink` and `logging` can build on the same
//! vocabulary without cycles. Severity ordering is load-bearing: sinks and
//! verbosity gates compare against thresholds with `>=`, and the single
//! character prefix of every rendered line is derived positionally from the
//! enum discriminant.

pub mod exit_code;
pub mod pool;
pub mod severity;

pub use exit_code::ExitCode;
pub use pool::{Pool, PoolGuard};
pub use severity::{ParseSeverityError, Severity};
