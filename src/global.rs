//! Process-wide logger accessor
//!
//! The context itself is plain dependency-injected state; this module keeps
//! the "one logger per process" surface for call sites with no reference to
//! pass around. Initialization happens exactly once, even under concurrent
//! first calls.

use std::sync::OnceLock;

use crate::core::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger.
///
/// Returns `false` (and drops `logger`) when one is already installed;
/// repeated initialization is a no-op, never a crash.
pub fn init(logger: Logger) -> bool {
    GLOBAL.set(logger).is_ok()
}

/// The process-wide logger, if [`init`] has run.
pub fn get() -> Option<&'static Logger> {
    GLOBAL.get()
}
