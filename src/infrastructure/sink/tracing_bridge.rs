//! Bridge from log lines to `tracing` events.

use crate::application::ports::LogSink;
use crate::domain::severity::Severity;
use std::io;

/// Sink forwarding lines to the current `tracing` subscriber.
///
/// Each line becomes one event with target `log_budget` at the level matching
/// its severity. The line already carries its timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn write_line(&self, severity: Severity, line: &str) -> io::Result<()> {
        match severity {
            Severity::Debug => tracing::debug!(target: "log_budget", "{}", line),
            Severity::Info => tracing::info!(target: "log_budget", "{}", line),
            Severity::Error => tracing::error!(target: "log_budget", "{}", line),
        }
        Ok(())
    }
}
