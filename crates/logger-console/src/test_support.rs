//! Test support utilities
//!
//! In-memory sinks for asserting what a router wrote and where. Available
//! to other crates with the `test-support` feature.

use crate::config::ConsoleConfig;
use crate::router::ConsoleRouter;
use crate::sink::{Sink, write_line_to};
use std::io;
use std::sync::{Arc, Mutex};

/// A sink that records the exact bytes written to it
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    /// Create an empty capture sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, terminators included
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("capture sink poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Lines written so far, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Check if any line contains `text`
    pub fn contains(&self, text: &str) -> bool {
        self.lines().iter().any(|line| line.contains(text))
    }

    /// Clear captured output
    pub fn clear(&self) {
        self.buffer.lock().expect("capture sink poisoned").clear();
    }
}

impl Sink for CaptureSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("capture sink poisoned"))?;
        write_line_to(&mut *buffer, line)
    }
}

/// A router wired to two capture sinks
#[derive(Debug, Clone)]
pub struct CapturedConsole {
    router: ConsoleRouter,
    stdout: CaptureSink,
    stderr: CaptureSink,
}

impl CapturedConsole {
    /// Build a router for `config` that writes into memory
    pub fn new(config: ConsoleConfig) -> Self {
        let stdout = CaptureSink::new();
        let stderr = CaptureSink::new();
        let router =
            ConsoleRouter::with_sinks(config, Arc::new(stdout.clone()), Arc::new(stderr.clone()));

        Self {
            router,
            stdout,
            stderr,
        }
    }

    /// The router under test
    pub fn router(&self) -> &ConsoleRouter {
        &self.router
    }

    /// A shareable handle to the router
    pub fn transport(&self) -> Arc<ConsoleRouter> {
        Arc::new(self.router.clone())
    }

    /// What was written to stdout
    pub fn stdout(&self) -> &CaptureSink {
        &self.stdout
    }

    /// What was written to stderr
    pub fn stderr(&self) -> &CaptureSink {
        &self.stderr
    }
}

impl Default for CapturedConsole {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_written_bytes() {
        let sink = CaptureSink::new();
        sink.write_line("boom").unwrap();
        sink.write_line("").unwrap();

        assert_eq!(sink.contents(), "boom\n\n");
        assert_eq!(sink.lines(), vec!["boom".to_string(), String::new()]);

        sink.clear();
        assert!(sink.lines().is_empty());
    }

    #[test]
    #[should_panic(expected = "capture sink poisoned")]
    fn poisoned_capture_is_not_silently_empty() {
        let sink = CaptureSink::new();
        let poisoner = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.buffer.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();

        let _ = sink.lines();
    }
}
