//! Basic local logging usage
//!
//! Run with: cargo run --example basic_usage

use cluster_logger_system::{info, warn, Logger, Result, Severity};

fn main() -> Result<()> {
    let logger = Logger::builder()
        .path(std::env::temp_dir().join("basic_usage.log"))
        .level(Severity::Info)
        .build()?;

    logger.write(Severity::Info, "application started")?;
    logger.write(Severity::Warn, "cache size near limit")?;
    logger.write(Severity::Error, "failed to load dataset")?;

    // Macros format like println! and report failures on stderr.
    info!(logger, "processed {} samples", 4096);
    warn!(logger, "distance matrix uses {} MB", 512);

    // Lowering the threshold suppresses more verbose levels.
    logger.set_level(Severity::Error);
    logger.write(Severity::Info, "not written")?;

    // Severity::None disables logging entirely.
    logger.set_level(Severity::None);
    logger.write(Severity::Error, "not written either")?;

    println!("log written to {}", logger.path().display());
    println!(
        "written={} suppressed={}",
        logger.metrics().lines_written(),
        logger.metrics().suppressed()
    );
    Ok(())
}
