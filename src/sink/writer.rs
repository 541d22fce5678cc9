//! Line sinks.
//!
//! A sink receives fully composed lines. Writes are best-effort: a failed
//! write is reported through tracing and otherwise dropped.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::warn;

/// Destination stream of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Receives one composed line per call.
///
/// Implementations must write each line whole; concurrent callers must not
/// see their lines interleaved.
pub trait LineSink: Send + Sync {
    fn write_line(&self, stream: Stream, line: &str);
}

/// Writes to the process's standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for ConsoleSink {
    fn write_line(&self, stream: Stream, line: &str) {
        // The stream lock is held for the whole line.
        let result = match stream {
            Stream::Stdout => write_locked(&mut io::stdout().lock(), line),
            Stream::Stderr => write_locked(&mut io::stderr().lock(), line),
        };

        if let Err(e) = result {
            warn!(error = %e, stream = ?stream, "Failed to write log line");
        }
    }
}

fn write_locked<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Keeps every line in memory.
///
/// Useful for tests and for hosts that forward lines themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in write order.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Captured lines written to one stream.
    pub fn lines_on(&self, stream: Stream) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<(Stream, String)> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((stream, line.to_string()));
    }
}
