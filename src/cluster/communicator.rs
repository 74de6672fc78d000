//! Transport seam between ranks of a job
//!
//! The collector is written against [`Communicator`] rather than a concrete
//! transport. [`LocalCommunicator`] is the in-process implementation used by
//! the thread-per-rank harness and the test suite.

use std::sync::{Arc, Barrier};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::error::{LoggerError, Result};

/// The rank that owns the backing file and runs the listener.
pub const COORDINATOR: u32 = 0;

/// Point-to-point and collective operations the collector needs from a job.
///
/// `send` is fire-and-forget: it must never block the producer and provides
/// no delivery acknowledgement. `barrier` is collective: every rank of the
/// job must reach it before any rank proceeds.
pub trait Communicator: Send + Sync {
    /// This process's rank within the job.
    fn rank(&self) -> u32;

    /// Number of ranks in the job.
    fn size(&self) -> u32;

    /// Collective synchronization point.
    fn barrier(&self);

    /// Enqueue a frame for delivery to `dest` without waiting.
    fn send(&self, dest: u32, frame: Vec<u8>) -> Result<()>;

    /// Non-blocking probe-and-receive of any pending inbound frame.
    fn try_recv(&self) -> Option<Vec<u8>>;

    /// Receive an inbound frame, waiting at most `timeout`.
    fn recv_timeout(&self, timeout: Duration) -> Option<Vec<u8>>;
}

/// In-process communicator: one endpoint per rank, connected by unbounded
/// channels, with a shared barrier.
///
/// Clones share their rank's endpoint (inbox included); collective calls must
/// be issued by exactly one live endpoint per rank.
#[derive(Clone)]
pub struct LocalCommunicator {
    rank: u32,
    outboxes: Arc<Vec<Sender<Vec<u8>>>>,
    inbox: Receiver<Vec<u8>>,
    barrier: Arc<Barrier>,
}

impl LocalCommunicator {
    /// Create the endpoints of a `size`-rank job, indexed by rank.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero.
    pub fn mesh(size: u32) -> Vec<Self> {
        assert!(size > 0, "a job has at least one rank");

        let (outboxes, inboxes): (Vec<_>, Vec<_>) = (0..size).map(|_| unbounded()).unzip();
        let outboxes = Arc::new(outboxes);
        let barrier = Arc::new(Barrier::new(size as usize));

        inboxes
            .into_iter()
            .enumerate()
            .map(|(rank, inbox)| Self {
                rank: rank as u32,
                outboxes: Arc::clone(&outboxes),
                inbox,
                barrier: Arc::clone(&barrier),
            })
            .collect()
    }
}

impl Communicator for LocalCommunicator {
    fn rank(&self) -> u32 {
        self.rank
    }

    fn size(&self) -> u32 {
        self.outboxes.len() as u32
    }

    fn barrier(&self) {
        self.barrier.wait();
    }

    fn send(&self, dest: u32, frame: Vec<u8>) -> Result<()> {
        let outbox = self
            .outboxes
            .get(dest as usize)
            .ok_or(LoggerError::UnknownRank(dest))?;
        outbox.send(frame).map_err(|_| LoggerError::ChannelSend)
    }

    fn try_recv(&self) -> Option<Vec<u8>> {
        self.inbox.try_recv().ok()
    }

    fn recv_timeout(&self, timeout: Duration) -> Option<Vec<u8>> {
        self.inbox.recv_timeout(timeout).ok()
    }
}
