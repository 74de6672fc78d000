//! Centralized collection across the ranks of a job
//!
//! Simulates a four-rank run with one thread per rank; rank 0 owns the
//! backing file and collects everyone's output.
//!
//! Run with: cargo run --example cluster_logging

use cluster_logger_system::cluster::{Communicator, LocalCommunicator, COORDINATOR};
use cluster_logger_system::{Logger, Result, Severity};
use std::thread;

fn main() -> Result<()> {
    let log_dir = std::env::temp_dir();
    let coordinator_log = log_dir.join("cluster_rank0.log");

    let handles: Vec<_> = LocalCommunicator::mesh(4)
        .into_iter()
        .map(|comm| {
            let path = log_dir.join(format!("cluster_rank{}.log", comm.rank()));
            thread::spawn(move || -> Result<()> {
                let logger = Logger::builder().path(path).level(Severity::Info).build()?;

                logger.start_listener(&comm)?;
                logger.cluster_write(
                    &comm,
                    Severity::Info,
                    format!("rank {} joined the job", comm.rank()),
                )?;
                if comm.rank() != COORDINATOR {
                    logger.cluster_write(&comm, Severity::Warn, "local partition is small")?;
                }
                logger.shutdown_listener(&comm)?;
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("rank thread panicked")?;
    }

    let content = std::fs::read_to_string(&coordinator_log).unwrap_or_default();
    println!("collected log at {}:", coordinator_log.display());
    print!("{}", content);
    Ok(())
}
