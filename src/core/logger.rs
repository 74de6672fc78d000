//! The process-wide logger context

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{LoggerError, Result};
use super::message::LogMessage;
use super::metrics::LoggerMetrics;
use super::severity::Severity;
use super::sink::FileSink;

#[cfg(feature = "cluster")]
use crate::cluster::collector::ListenerState;

/// Logger context: constructed once at process startup and shared by
/// reference with every component that logs. One instance per process; the
/// backing file path is fixed at construction and the file is opened lazily
/// on the first emitted write.
///
/// The context starts disabled (`Severity::None`); nothing is written until a
/// threshold is configured.
pub struct Logger {
    threshold: RwLock<Severity>,
    pub(crate) sink: Arc<FileSink>,
    pub(crate) metrics: Arc<LoggerMetrics>,
    #[cfg(feature = "cluster")]
    pub(crate) listener: ListenerState,
}

impl Logger {
    /// Create a builder for the context
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Set the severity threshold. `Severity::None` disables all logging.
    pub fn set_level(&self, level: Severity) {
        *self.threshold.write() = level;
    }

    pub fn level(&self) -> Severity {
        *self.threshold.read()
    }

    /// Path of the backing file, fixed at construction.
    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Write one message to the local backing file.
    ///
    /// Messages filtered out by the threshold are a silent no-op, as are
    /// empty messages. Everything else is appended as one line and flushed
    /// before this call returns; an IO failure is surfaced here, not retried.
    pub fn write(&self, level: Severity, text: impl Into<String>) -> Result<()> {
        if !level.should_emit(self.level()) {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let message = LogMessage::local(level, text);
        if message.text.is_empty() {
            return Ok(());
        }

        let line = message.format_line()?;
        self.sink.append(&line)?;
        self.metrics.record_written();
        Ok(())
    }

    #[inline]
    pub fn info(&self, text: impl Into<String>) -> Result<()> {
        self.write(Severity::Info, text)
    }

    #[inline]
    pub fn warn(&self, text: impl Into<String>) -> Result<()> {
        self.write(Severity::Warn, text)
    }

    #[inline]
    pub fn error(&self, text: impl Into<String>) -> Result<()> {
        self.write(Severity::Error, text)
    }
}

/// Builder for constructing the logger context
///
/// # Example
/// ```
/// use cluster_logger_system::{Logger, Severity};
///
/// let logger = Logger::builder()
///     .path(std::env::temp_dir().join("job.log"))
///     .level(Severity::Info)
///     .build()
///     .unwrap();
/// assert_eq!(logger.level(), Severity::Info);
/// ```
pub struct LoggerBuilder {
    path: Option<PathBuf>,
    level: Severity,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            path: None,
            level: Severity::default(),
        }
    }

    /// Set the backing file path. Defaults to a per-process file under the
    /// system temp directory.
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the initial severity threshold. Defaults to `Severity::None`
    /// (disabled).
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Build the context.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when an explicitly supplied path is empty.
    pub fn build(self) -> Result<Logger> {
        let path = match self.path {
            Some(path) => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("logger", "backing file path is empty"));
                }
                path
            }
            None => default_log_path(),
        };

        Ok(Logger {
            threshold: RwLock::new(self.level),
            sink: Arc::new(FileSink::new(path)),
            metrics: Arc::new(LoggerMetrics::new()),
            #[cfg(feature = "cluster")]
            listener: ListenerState::new(),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("cluster_logger_{}.log", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build().unwrap();
        assert_eq!(logger.level(), Severity::None);
        assert!(!logger.path().as_os_str().is_empty());
    }

    #[test]
    fn test_builder_rejects_empty_path() {
        let result = Logger::builder().path("").build();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_level_is_mutable_after_build() {
        let logger = Logger::builder().level(Severity::Warn).build().unwrap();
        assert_eq!(logger.level(), Severity::Warn);
        logger.set_level(Severity::Info);
        assert_eq!(logger.level(), Severity::Info);
    }

    #[test]
    fn test_disabled_logger_never_touches_the_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("disabled.log");
        let logger = Logger::builder().path(&path).build().unwrap();

        logger.write(Severity::Error, "dropped").unwrap();
        logger.write(Severity::Info, "dropped").unwrap();

        assert!(!path.exists());
        assert_eq!(logger.metrics().suppressed(), 2);
    }
}
