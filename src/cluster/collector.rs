//! Coordinator-side collection of remote log lines
//!
//! Lifecycle: Idle → Listening → Draining → Stopped. Only the coordinator
//! ever runs a listener; every other rank only sends. Both lifecycle calls
//! are collective: every rank of the job must reach them, and the shutdown
//! barrier is the contract that no rank sends afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::error::{LoggerError, Result};
use crate::core::logger::Logger;
use crate::core::message::LogMessage;
use crate::core::metrics::LoggerMetrics;
use crate::core::severity::Severity;
use crate::core::sink::FileSink;

use super::communicator::{Communicator, COORDINATOR};
use super::wire::Envelope;

/// How long the listener blocks waiting for a frame before re-checking the
/// shutdown flag.
const RECV_POLL: Duration = Duration::from_millis(20);

/// What a cluster write did with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Below the threshold or empty; nothing was written or sent.
    Suppressed,
    /// Coordinator: the line is flushed to the backing file.
    Written,
    /// Non-coordinator: the frame was handed to the transport. Delivery is
    /// best-effort with no acknowledgement.
    Enqueued,
}

/// Listener bookkeeping on the coordinator. The handle mutex doubles as the
/// startup lock serializing concurrent start attempts.
pub(crate) struct ListenerState {
    running: Arc<AtomicBool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl ListenerState {
    pub(crate) fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            handle: Mutex::new(None),
        }
    }
}

impl Logger {
    /// Start centralized collection.
    ///
    /// Every rank must call this; all ranks rendezvous at a barrier first.
    /// On a non-coordinator rank, in a single-rank job, or when a listener is
    /// already running, the call is a no-op that still honors the barrier.
    /// Otherwise the listener thread is spawned and begins draining inbound
    /// frames into the backing file.
    pub fn start_listener<C>(&self, comm: &C) -> Result<()>
    where
        C: Communicator + Clone + 'static,
    {
        comm.barrier();
        if comm.rank() != COORDINATOR || comm.size() == 1 {
            return Ok(());
        }

        let mut handle = self.listener.handle.lock();
        if handle.is_some() {
            // Already listening; a repeated start is a no-op.
            return Ok(());
        }

        self.listener.running.store(true, Ordering::Release);

        let comm = comm.clone();
        let sink = Arc::clone(&self.sink);
        let metrics = Arc::clone(&self.metrics);
        let running = Arc::clone(&self.listener.running);
        let spawned = thread::Builder::new()
            .name("log-collector".into())
            .spawn(move || listen(comm, sink, metrics, running));

        match spawned {
            Ok(worker) => {
                *handle = Some(worker);
                Ok(())
            }
            Err(e) => {
                self.listener.running.store(false, Ordering::Release);
                Err(e.into())
            }
        }
    }

    /// Stop centralized collection.
    ///
    /// Every rank must call this, strictly after its last cluster write. The
    /// stop flag is raised, all ranks rendezvous at the barrier, and the
    /// coordinator then joins the listener and drains anything still pending,
    /// so on return every message enqueued before the barrier is in the file.
    /// Without a running listener this is a no-op.
    pub fn shutdown_listener<C: Communicator>(&self, comm: &C) -> Result<()> {
        self.listener.running.store(false, Ordering::Release);
        comm.barrier();
        if comm.rank() != COORDINATOR {
            return Ok(());
        }

        let worker = self.listener.handle.lock().take();
        let Some(worker) = worker else {
            return Ok(());
        };
        worker.join().map_err(|_| LoggerError::ListenerPanicked)?;

        // Frames enqueued before the barrier can still be in the inbox if the
        // listener observed the stop flag before they arrived.
        while let Some(frame) = comm.try_recv() {
            forward(&frame, &self.sink, &self.metrics);
        }
        Ok(())
    }

    /// Write one message from any rank of the job.
    ///
    /// The severity filter runs locally, so suppressed messages cause no
    /// traffic. The coordinator appends directly to the backing file; every
    /// other rank fires the formatted line at the coordinator and returns
    /// without waiting for delivery.
    pub fn cluster_write<C: Communicator>(
        &self,
        comm: &C,
        level: Severity,
        text: impl Into<String>,
    ) -> Result<SendOutcome> {
        if !level.should_emit(self.level()) {
            self.metrics.record_suppressed();
            return Ok(SendOutcome::Suppressed);
        }

        let message = LogMessage::from_rank(comm.rank(), level, text);
        if message.text.is_empty() {
            return Ok(SendOutcome::Suppressed);
        }
        let line = message.format_line()?;

        if comm.rank() == COORDINATOR {
            self.sink.append(&line)?;
            self.metrics.record_written();
            Ok(SendOutcome::Written)
        } else {
            let frame = Envelope::new(comm.rank(), line).encode()?;
            comm.send(COORDINATOR, frame)?;
            self.metrics.record_remote_enqueued();
            Ok(SendOutcome::Enqueued)
        }
    }
}

/// Listener body: block briefly for a frame, then drain everything pending
/// before looking at the stop flag again, so a burst of N messages is flushed
/// in one pass rather than one message per wakeup.
fn listen<C: Communicator>(
    comm: C,
    sink: Arc<FileSink>,
    metrics: Arc<LoggerMetrics>,
    running: Arc<AtomicBool>,
) {
    loop {
        if let Some(frame) = comm.recv_timeout(RECV_POLL) {
            forward(&frame, &sink, &metrics);
            while let Some(frame) = comm.try_recv() {
                forward(&frame, &sink, &metrics);
            }
        }

        if !running.load(Ordering::Acquire) {
            while let Some(frame) = comm.try_recv() {
                forward(&frame, &sink, &metrics);
            }
            return;
        }
    }
}

/// Decode one frame and append its line. A failure is reported and counted
/// but never stops the drain.
fn forward(frame: &[u8], sink: &FileSink, metrics: &LoggerMetrics) {
    match Envelope::decode(frame).and_then(|envelope| sink.append(&envelope.line)) {
        Ok(()) => {
            metrics.record_forwarded();
        }
        Err(e) => {
            metrics.record_forward_failure();
            eprintln!("[LOGGER ERROR] dropping remote log entry: {}", e);
        }
    }
}
