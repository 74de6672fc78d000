//! # Cluster Logger System
//!
//! A thread-safe, severity-filtered logging facility for numeric-computing
//! jobs, with centralized collection of log output on the coordinating rank
//! of a multi-rank run.
//!
//! ## Features
//!
//! - **Severity filtering**: ordered `none < error < warn < info` scale where
//!   `none` disables logging entirely
//! - **Single backing file**: mutex-guarded, lazily opened, flushed per line
//! - **Cluster collection** (feature `cluster`): non-coordinator ranks fire
//!   formatted lines at rank 0 without blocking; a listener thread on rank 0
//!   drains them into the file
//! - **Thread safe**: designed for concurrent producers

pub mod core;
pub mod global;
pub mod macros;

#[cfg(feature = "cluster")]
pub mod cluster;

pub mod prelude {
    pub use crate::core::{
        FileSink, LogMessage, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Origin, Result,
        Severity,
    };

    #[cfg(feature = "cluster")]
    pub use crate::cluster::{
        Communicator, Envelope, LocalCommunicator, SendOutcome, COORDINATOR,
    };
}

pub use core::{
    FileSink, LogMessage, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Origin, Result,
    Severity,
};

#[cfg(feature = "cluster")]
pub use cluster::{Communicator, Envelope, LocalCommunicator, SendOutcome, COORDINATOR};
