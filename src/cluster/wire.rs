//! Wire format for forwarded log lines

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// One already-formatted log line, tagged with the sending rank.
///
/// The line is rendered on the sending side so that a malformed severity is
/// surfaced to the caller there, and the coordinator only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub origin: u32,
    pub line: String,
}

impl Envelope {
    pub fn new(origin: u32, line: impl Into<String>) -> Self {
        Self {
            origin,
            line: line.into(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn decode(frame: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(frame)?)
    }
}
