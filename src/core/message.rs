//! Log message construction and line formatting

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::Result;
use super::severity::Severity;

/// Where a message was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Single-process mode.
    Local,
    /// One rank of a multi-rank job.
    Rank(u32),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Local => write!(f, "local"),
            Origin::Rank(rank) => write!(f, "CPU {}", rank),
        }
    }
}

/// A leveled message, constructed at the point of emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    pub origin: Origin,
    pub level: Severity,
    pub text: String,
}

impl LogMessage {
    /// Escape line breaks and tabs so a message can never forge extra log
    /// lines and one message always maps to one appended line.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(origin: Origin, level: Severity, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            origin,
            level,
            text: Self::sanitize(&text),
        }
    }

    pub fn local(level: Severity, text: impl Into<String>) -> Self {
        Self::new(Origin::Local, level, text)
    }

    pub fn from_rank(rank: u32, level: Severity, text: impl Into<String>) -> Self {
        Self::new(Origin::Rank(rank), level, text)
    }

    /// Render the persisted line: `<origin> - [<level>] <text>`.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidSeverity`] when the level has no emit label.
    ///
    /// [`LoggerError::InvalidSeverity`]: super::error::LoggerError::InvalidSeverity
    pub fn format_line(&self) -> Result<String> {
        let label = self.level.label()?;
        Ok(format!("{} - [{}] {}", self.origin, label, self.text))
    }
}
