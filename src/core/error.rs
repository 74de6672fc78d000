//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Line formatting was requested for a severity with no emit label
    #[error("log severity has no emit label")]
    InvalidSeverity,

    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Another process already holds the backing file
    #[error("failed to acquire exclusive lock on '{path}'")]
    FileLock { path: String },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Malformed wire frame
    #[error("wire frame error: {0}")]
    Frame(#[from] serde_json::Error),

    /// Send addressed to a rank outside the job
    #[error("no such rank: {0}")]
    UnknownRank(u32),

    /// Transport endpoint disconnected before the frame was enqueued
    #[error("transport endpoint disconnected")]
    ChannelSend,

    /// Listener thread terminated abnormally
    #[error("listener thread panicked")]
    ListenerPanicked,
}

impl LoggerError {
    /// Create an IO error with operation and path context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLock { path: path.into() }
    }
}
