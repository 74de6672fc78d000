//! Centralized log collection for multi-rank jobs
//!
//! All ranks of a job funnel their log output into the coordinator's backing
//! file: the coordinator writes directly, every other rank fires formatted
//! lines at the coordinator's listener thread over a [`Communicator`].

pub mod collector;
pub mod communicator;
pub mod wire;

pub use collector::SendOutcome;
pub use communicator::{Communicator, LocalCommunicator, COORDINATOR};
pub use wire::Envelope;
