//! Integration tests for the local write path
//!
//! These tests verify:
//! - Severity threshold behavior against the backing file
//! - Line-atomic concurrent writes
//! - Empty-message and disabled-logger no-ops
//! - Log injection prevention
//! - Process-wide accessor idempotence

use cluster_logger_system::{global, Logger, LoggerError, Severity};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn logger_at(dir: &TempDir, name: &str, level: Severity) -> Logger {
    Logger::builder()
        .path(dir.path().join(name))
        .level(level)
        .build()
        .expect("Failed to build logger")
}

#[test]
fn test_write_levels_and_line_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = logger_at(&dir, "format.log", Severity::Info);

    logger.write(Severity::Info, "starting run").unwrap();
    logger.write(Severity::Warn, "low memory").unwrap();
    logger.write(Severity::Error, "solver diverged").unwrap();

    let content = fs::read_to_string(logger.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "local - [info] starting run",
            "local - [warn] low memory",
            "local - [error] solver diverged",
        ]
    );
}

#[test]
fn test_threshold_suppresses_more_verbose_levels() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = logger_at(&dir, "threshold.log", Severity::Warn);

    logger.write(Severity::Info, "hidden").unwrap();
    logger.write(Severity::Warn, "visible warn").unwrap();
    logger.write(Severity::Error, "visible error").unwrap();

    let content = fs::read_to_string(logger.path()).unwrap();
    assert!(!content.contains("hidden"));
    assert_eq!(content.lines().count(), 2);
    assert_eq!(logger.metrics().suppressed(), 1);
    assert_eq!(logger.metrics().lines_written(), 2);
}

#[test]
fn test_none_threshold_suppresses_everything() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = logger_at(&dir, "disabled.log", Severity::Info);

    logger.set_level(Severity::None);
    logger.write(Severity::Error, "dropped").unwrap();
    logger.write(Severity::Warn, "dropped").unwrap();
    logger.write(Severity::Info, "dropped").unwrap();
    logger.write(Severity::None, "dropped").unwrap();

    // The file is opened lazily, so a fully suppressed logger never creates it.
    assert!(!logger.path().exists());
}

#[test]
fn test_empty_message_is_a_noop() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = logger_at(&dir, "empty.log", Severity::Info);

    logger.write(Severity::Info, "").unwrap();
    assert!(!logger.path().exists(), "empty write must produce zero bytes");

    logger.write(Severity::Info, "real").unwrap();
    logger.write(Severity::Info, "").unwrap();
    let content = fs::read_to_string(logger.path()).unwrap();
    assert_eq!(content, "local - [info] real\n");
}

#[test]
fn test_concurrent_writers_produce_complete_lines() {
    const WRITERS: usize = 50;
    const LINES_PER_WRITER: usize = 100;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(logger_at(&dir, "concurrent.log", Severity::Info));

    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for line in 0..LINES_PER_WRITER {
                    logger
                        .write(Severity::Info, format!("writer {} line {}", writer, line))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let content = fs::read_to_string(logger.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), WRITERS * LINES_PER_WRITER);

    // Every line is complete and distinct; interleaved or merged lines would
    // fail the parse or collapse the set.
    let mut seen = HashSet::new();
    for line in lines {
        let payload = line
            .strip_prefix("local - [info] writer ")
            .unwrap_or_else(|| panic!("malformed line: {:?}", line));
        let mut parts = payload.split(" line ");
        let writer: usize = parts.next().unwrap().parse().unwrap();
        let line_no: usize = parts.next().unwrap().parse().unwrap();
        assert!(parts.next().is_none());
        assert!(seen.insert((writer, line_no)), "duplicate line: {:?}", line);
    }
    assert_eq!(seen.len(), WRITERS * LINES_PER_WRITER);
}

#[test]
fn test_embedded_newlines_cannot_forge_entries() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = logger_at(&dir, "injection.log", Severity::Info);

    logger
        .write(Severity::Info, "user login\nlocal - [error] forged entry")
        .unwrap();

    let content = fs::read_to_string(logger.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1, "message must stay a single line");
    assert!(lines[0].contains("\\n"));
}

#[test]
fn test_io_failure_is_surfaced_and_does_not_wedge_the_logger() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .path(dir.path().join("no_such_dir").join("out.log"))
        .level(Severity::Info)
        .build()
        .unwrap();

    assert!(matches!(
        logger.write(Severity::Info, "first"),
        Err(LoggerError::IoOperation { .. })
    ));
    // The write lock was released on the failure path.
    assert!(logger.write(Severity::Info, "second").is_err());
}

#[test]
fn test_global_accessor_is_idempotent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("global.log");
    let logger = Logger::builder()
        .path(&path)
        .level(Severity::Info)
        .build()
        .unwrap();

    assert!(global::init(logger));

    // A second installation is refused without error.
    let other = Logger::builder().build().unwrap();
    assert!(!global::init(other));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| global::get().expect("global logger installed") as *const Logger as usize)
        })
        .collect();
    let first = global::get().unwrap() as *const Logger as usize;
    for handle in handles {
        assert_eq!(handle.join().unwrap(), first);
    }
    assert_eq!(global::get().unwrap().path(), path);
}
