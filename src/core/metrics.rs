//! Counters for logger observability
//!
//! Tracks what the write paths actually did: lines on disk, suppressed
//! writes, remote frames handed to the transport, and listener forwarding
//! outcomes on the coordinator.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines appended to the backing file by local or coordinator writes
    lines_written: AtomicU64,

    /// Writes filtered out by the severity threshold
    suppressed: AtomicU64,

    /// Frames handed to the transport by non-coordinator ranks
    remote_enqueued: AtomicU64,

    /// Remote frames the listener forwarded to the backing file
    forwarded: AtomicU64,

    /// Remote frames the listener could not decode or append
    forward_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            remote_enqueued: AtomicU64::new(0),
            forwarded: AtomicU64::new(0),
            forward_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn remote_enqueued(&self) -> u64 {
        self.remote_enqueued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn forwarded(&self) -> u64 {
        self.forwarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn forward_failures(&self) -> u64 {
        self.forward_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_remote_enqueued(&self) -> u64 {
        self.remote_enqueued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_forwarded(&self) -> u64 {
        self.forwarded.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_forward_failure(&self) -> u64 {
        self.forward_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.remote_enqueued.store(0, Ordering::Relaxed);
        self.forwarded.store(0, Ordering::Relaxed);
        self.forward_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
