//! Severity levels and the emission filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{LoggerError, Result};

/// Ordered severity scale. Higher numeric value means more verbose; `None` is
/// both the lowest level and the disabled sentinel, so a `None` threshold
/// suppresses every message and a `None` message is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
}

impl Severity {
    /// Emission rule: a message passes iff neither side is `None` and the
    /// message is at most as verbose as the threshold. Pure, never fails.
    pub fn should_emit(self, threshold: Severity) -> bool {
        self != Severity::None && threshold != Severity::None && self <= threshold
    }

    /// Label used in the persisted line. Only the three emit-capable levels
    /// carry one; asking for the `None` label is the single validation failure
    /// in the write path.
    pub fn label(self) -> Result<&'static str> {
        match self {
            Severity::Info => Ok("info"),
            Severity::Warn => Ok("warn"),
            Severity::Error => Ok("error"),
            Severity::None => Err(LoggerError::InvalidSeverity),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::None => "none",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Severity::None),
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
