//! Mutex-guarded append-only file sink

use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::{LoggerError, Result};

/// Exclusive writer over a single backing file.
///
/// The file is opened lazily on the first non-empty append and stays open for
/// the rest of the process lifetime; every append is flushed before the lock
/// is released, so a line is either fully on disk or not written at all, and
/// lines from concurrent callers never interleave.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(None),
        }
    }

    /// Path of the backing file, fixed at construction.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line. Empty lines are dropped without touching the file.
    ///
    /// An open or write failure is surfaced to this call and not retried; the
    /// guard is released on every exit path, so later callers are unaffected.
    pub fn append(&self, line: &str) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }

        let mut writer = self.writer.lock();
        if writer.is_none() {
            *writer = Some(self.open()?);
        }
        let out = writer
            .as_mut()
            .ok_or_else(|| LoggerError::config("sink", "file writer unavailable"))?;

        out.write_all(line.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .and_then(|()| out.flush())
            .map_err(|e| {
                LoggerError::io_operation("appending to", self.path.display().to_string(), e)
            })
    }

    fn open(&self) -> Result<BufWriter<File>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation("opening", self.path.display().to_string(), e)
            })?;

        // The backing file belongs to exactly one logger context.
        file.try_lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;

        Ok(BufWriter::new(file))
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.get_mut() {
            let _ = writer.flush();
        }
    }
}
