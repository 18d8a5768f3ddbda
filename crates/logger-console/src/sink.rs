//! Output sinks
//!
//! A router never touches the process streams directly; it writes to two
//! injected [`Sink`]s. [`StdStream`] is the default pair.

use std::io::{self, Write};

/// A line-oriented write target
pub trait Sink: Send + Sync + 'static {
    /// Write one line; the sink appends the line terminator
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush any buffered output
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Any thread-safe closure taking a line is a sink
impl<F> Sink for F
where
    F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        self(line)
    }
}

/// The process's standard streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdStream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

/// Write `line` and its terminator to `out`, then flush
pub(crate) fn write_line_to(out: &mut impl Write, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")?;
    out.flush()
}

impl Sink for StdStream {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // Hold the stream lock for the whole line so lines never interleave
        match self {
            Self::Stdout => write_line_to(&mut io::stdout().lock(), line),
            Self::Stderr => write_line_to(&mut io::stderr().lock(), line),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
        }
    }
}
