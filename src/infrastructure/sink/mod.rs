//! Sink adapters.
//!
//! Each sink serializes its own writes, so lines from concurrent callers are
//! never interleaved:
//! - [`FileSink`]: an already-open file, closable by its owner
//! - [`WriterSink`]: any `io::Write` behind a mutex
//! - [`StderrSink`]: the process debug-output channel
//! - [`TracingSink`]: forwards lines into the `tracing` ecosystem

mod file;
mod stderr;
mod tracing_bridge;
mod writer;

pub use file::FileSink;
pub use stderr::StderrSink;
pub use tracing_bridge::TracingSink;
pub use writer::WriterSink;

use std::io::{self, Write};

/// Write `line` followed by a newline, then flush.
///
/// If the line fails partway, a newline is still attempted so the next line
/// starts on its own. The original error is returned.
fn write_terminated<W: Write + ?Sized>(writer: &mut W, line: &str) -> io::Result<()> {
    if let Err(e) = writer.write_all(line.as_bytes()) {
        let _ = writer.write_all(b"\n");
        let _ = writer.flush();
        return Err(e);
    }
    writer.write_all(b"\n")?;
    writer.flush()
}
