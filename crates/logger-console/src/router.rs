//! Severity-based console router

use crate::completion::Completion;
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::record::LogRecord;
use crate::sink::{Sink, StdStream};
use crate::transport::Transport;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Transport that writes each record to stdout, or to stderr when the
/// record's severity is one of the configured error severities.
#[derive(Clone)]
pub struct ConsoleRouter {
    config: ConsoleConfig,
    stdout: Arc<dyn Sink>,
    stderr: Arc<dyn Sink>,
}

impl ConsoleRouter {
    /// Name reported through [`Transport::name`]
    pub const NAME: &'static str = "console";

    /// Create a router writing to the process's standard streams
    pub fn new(config: ConsoleConfig) -> Self {
        Self::with_sinks(
            config,
            Arc::new(StdStream::Stdout),
            Arc::new(StdStream::Stderr),
        )
    }

    /// Create a router writing to the given sinks
    pub fn with_sinks(config: ConsoleConfig, stdout: Arc<dyn Sink>, stderr: Arc<dyn Sink>) -> Self {
        debug!(
            error_severities = %config.error_severities(),
            prefix = ?config.prefix(),
            "console router configured"
        );

        Self {
            config,
            stdout,
            stderr,
        }
    }

    /// Create a router on the standard streams from untyped options.
    ///
    /// Fails with [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// when the severities are not an array of strings.
    pub fn create(options: &Value) -> Result<Self> {
        Ok(Self::new(ConsoleConfig::from_value(options)?))
    }

    /// The configuration this router was built with
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Whether a severity is routed to stderr
    #[inline]
    pub fn routes_to_stderr(&self, severity: &str) -> bool {
        self.config.error_severities().contains(severity)
    }

    /// Write one record to the sink chosen by its severity, then fire
    /// `on_complete`.
    ///
    /// A failed write is returned as-is and the completion is not fired.
    pub fn emit(&self, record: &LogRecord<'_>, on_complete: Option<Completion>) -> Result<()> {
        let message = match self.config.prefix() {
            Some(prefix) => Cow::Owned(format!("{prefix}: {}", record.message)),
            None => Cow::Borrowed(record.message.as_ref()),
        };

        let sink = if self.routes_to_stderr(&record.severity) {
            &self.stderr
        } else {
            &self.stdout
        };
        sink.write_line(&message)?;

        if let Some(on_complete) = on_complete {
            on_complete.signal();
        }

        Ok(())
    }
}

impl Default for ConsoleRouter {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

impl fmt::Debug for ConsoleRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleRouter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Transport for ConsoleRouter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn log(&self, record: &LogRecord<'_>, on_complete: Option<Completion>) -> Result<()> {
        self.emit(record, on_complete)
    }

    fn flush(&self) -> Result<()> {
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(())
    }
}
