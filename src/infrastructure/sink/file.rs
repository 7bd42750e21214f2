//! File sink for log files opened by the host.

use super::write_terminated;
use crate::application::ports::LogSink;
use crate::domain::severity::Severity;
use std::fs::File;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink writing to a file opened by the host.
///
/// The sink never opens, creates or rotates files. Open the file in append
/// mode and hand it over; every line is flushed as soon as it is written.
/// After [`close`](FileSink::close), writes are silently dropped.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Wrap an open file.
    pub fn new(file: File) -> Self {
        Self {
            file: Mutex::new(Some(file)),
        }
    }

    /// Flush and release the file. Later writes become no-ops.
    ///
    /// Closing an already closed sink does nothing.
    pub fn close(&self) -> io::Result<()> {
        match self.lock().take() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }

    /// Whether the sink still holds its file.
    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<File> for FileSink {
    fn from(file: File) -> Self {
        Self::new(file)
    }
}

impl LogSink for FileSink {
    fn write_line(&self, _severity: Severity, line: &str) -> io::Result<()> {
        match self.lock().as_mut() {
            Some(file) => write_terminated(file, line),
            None => Ok(()),
        }
    }
}
