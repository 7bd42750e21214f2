//! Generic `io::Write` sink.

use super::write_terminated;
use crate::application::ports::LogSink;
use crate::domain::severity::Severity;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Sink writing to any `io::Write` behind a mutex.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Run `f` with exclusive access to the writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send + std::fmt::Debug,
{
    fn write_line(&self, _severity: Severity, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        write_terminated(&mut *writer, line)
    }
}
