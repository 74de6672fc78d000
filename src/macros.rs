//! Logging macros for ergonomic message formatting.
//!
//! These macros format like `println!` and report a failed write on stderr
//! instead of propagating it, so call sites stay one line.
//!
//! # Examples
//!
//! ```
//! use cluster_logger_system::{info, warn, Logger, Severity};
//!
//! let logger = Logger::builder()
//!     .path(std::env::temp_dir().join("macros_doc.log"))
//!     .level(Severity::Info)
//!     .build()
//!     .unwrap();
//!
//! info!(logger, "training epoch {} finished", 3);
//! warn!(logger, "step size below {}", 1e-6);
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use cluster_logger_system::{log, Logger, Severity};
/// # let logger = Logger::builder().level(Severity::Info).build().unwrap();
/// log!(logger, Severity::Info, "job started");
/// log!(logger, Severity::Error, "exit code: {}", 1);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        if let Err(e) = $logger.write($level, format!($($arg)+)) {
            eprintln!("[LOGGER ERROR] failed to write log entry: {}", e);
        }
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warn-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}
