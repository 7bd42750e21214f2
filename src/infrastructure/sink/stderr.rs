//! Standard error sink.

use super::write_terminated;
use crate::application::ports::LogSink;
use crate::domain::severity::Severity;
use std::io;

/// Sink writing to standard error, the process debug-output channel.
///
/// Each line is written while holding the stderr lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a stderr sink.
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StderrSink {
    fn write_line(&self, _severity: Severity, line: &str) -> io::Result<()> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        write_terminated(&mut handle, line)
    }
}
