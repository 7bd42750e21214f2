//! Log records and bounded line rendering.
//!
//! A record renders as `YYYY-MM-DD HH:MM:SS ±ZZZZ: <message>` into a
//! [`LineBuffer`] of fixed byte capacity. Content that does not fit is dropped
//! at a UTF-8 character boundary; rendering itself never fails.

use super::severity::Severity;
use chrono::{DateTime, FixedOffset};
use std::fmt::{self, Write};

/// Default capacity of a rendered line in bytes, excluding the line terminator.
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// `strftime` pattern of the line timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Separator between the timestamp and the message.
pub const TIMESTAMP_SEPARATOR: &str = ": ";

/// Byte length of a rendered prefix such as `2024-01-02 03:04:05 +0100: `.
///
/// This is also the smallest accepted line capacity.
pub const TIMESTAMP_PREFIX_LEN: usize = 27;

/// A message waiting to be formatted.
///
/// Pairs the type-checked format arguments with the literal template they
/// came from. The template is what gets logged if a `Display` implementation
/// inside the arguments fails.
///
/// Built by the [`message!`](crate::message) macro and the `log_*!` macros.
#[derive(Debug, Clone, Copy)]
pub struct Message<'a> {
    template: &'static str,
    args: fmt::Arguments<'a>,
}

impl<'a> Message<'a> {
    /// Create a message from a template and the arguments formatted from it.
    pub fn new(template: &'static str, args: fmt::Arguments<'a>) -> Self {
        Self { template, args }
    }

    /// The unformatted template.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// The format arguments.
    pub fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }
}

/// Fixed-capacity text buffer that truncates instead of failing.
///
/// Storage grows with the content and never past the capacity. Writes past the capacity are cut at the last character boundary that
/// fits, and every write after that is ignored so the kept content is always
/// a prefix of what was written.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buf: String,
    capacity: usize,
    truncated: bool,
}

impl LineBuffer {
    /// Create an empty buffer holding at most `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
            truncated: false,
        }
    }

    /// The rendered content.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum content length in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether any write was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Discard content from byte `len` onward and clear the truncation flag.
    ///
    /// `len` must lie on a character boundary of the current content.
    fn rollback(&mut self, len: usize) {
        if len <= self.buf.len() {
            self.buf.truncate(len);
            self.truncated = false;
        }
    }

    /// Consume the buffer and return the content.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let remaining = self.capacity.saturating_sub(self.buf.len());
        if s.len() <= remaining {
            self.buf.push_str(s);
            return Ok(());
        }

        let mut end = remaining;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        self.truncated = true;
        Ok(())
    }
}

/// A single log call, ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Severity of the call
    pub severity: Severity,
    /// Wall-clock time of the call
    pub timestamp: DateTime<FixedOffset>,
    /// The message to format
    pub message: Message<'a>,
}

impl<'a> LogRecord<'a> {
    /// Create a new record.
    pub fn new(severity: Severity, timestamp: DateTime<FixedOffset>, message: Message<'a>) -> Self {
        Self {
            severity,
            timestamp,
            message,
        }
    }

    /// Render the record into `line`, replacing its previous content.
    ///
    /// If formatting the message fails, whatever was written of it is
    /// discarded and the template is rendered instead.
    pub fn render_into(&self, line: &mut LineBuffer) {
        line.rollback(0);

        // Writes into a LineBuffer only fail when a user Display impl does.
        let _ = write!(
            line,
            "{}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            TIMESTAMP_SEPARATOR
        );

        let prefix_len = line.len();
        if line.write_fmt(self.message.args()).is_err() {
            line.rollback(prefix_len);
            let _ = line.write_str(self.message.template());
        }
    }

    /// Render the record into a new buffer of the given capacity.
    pub fn render(&self, capacity: usize) -> LineBuffer {
        let mut line = LineBuffer::with_capacity(capacity);
        self.render_into(&mut line);
        line
    }
}
