//! In-memory sink for testing.

use crate::application::ports::LogSink;
use crate::domain::severity::Severity;
use std::io;
use std::sync::{Arc, Mutex};

/// A line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CapturedLine {
    pub severity: Severity,
    pub line: String,
}

/// Sink that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the logger
/// and inspect another. `set_failing(true)` makes writes return an error
/// without recording anything.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    lines: Vec<CapturedLine>,
    failing: bool,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured lines with their severities.
    pub fn captured(&self) -> Vec<CapturedLine> {
        self.lock().lines.clone()
    }

    /// Get the text of all captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.iter().map(|c| c.line.clone()).collect()
    }

    /// Get the number of captured lines.
    pub fn count(&self) -> usize {
        self.lock().lines.len()
    }

    /// Count captured lines whose text ends with `suffix`.
    pub fn count_ending_with(&self, suffix: &str) -> usize {
        self.lock()
            .lines
            .iter()
            .filter(|c| c.line.ends_with(suffix))
            .count()
    }

    /// Clear all captured lines.
    pub fn clear(&self) {
        self.lock().lines.clear();
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemorySinkInner> {
        self.inner
            .lock()
            .expect("MemorySink mutex poisoned - a test thread panicked while holding the lock")
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, severity: Severity, line: &str) -> io::Result<()> {
        let mut inner = self.lock();
        if inner.failing {
            return Err(io::Error::new(io::ErrorKind::Other, "memory sink set to fail"));
        }
        inner.lines.push(CapturedLine {
            severity,
            line: line.to_string(),
        });
        Ok(())
    }
}
