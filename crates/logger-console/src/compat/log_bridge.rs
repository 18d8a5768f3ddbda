//! Bridge from the `log` crate to a transport

use crate::{LogRecord, Transport};
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::Arc;

/// Wrapper implementing the log crate's `Log` trait
pub struct LogBridge {
    transport: Arc<dyn Transport>,
    max_level: LevelFilter,
}

impl LogBridge {
    /// Create a bridge forwarding every level
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            max_level: LevelFilter::Trace,
        }
    }

    /// Only forward records at or above `max_level`
    pub fn with_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let rendered = LogRecord::new(severity_label(record.level()), record.args().to_string());

        // The log facade has nowhere to report a failed write
        let _ = self.transport.log(&rendered, None);
    }

    fn flush(&self) {
        let _ = self.transport.flush();
    }
}

/// Lowercase severity label for a log level
pub fn severity_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "error",
        log::Level::Warn => "warn",
        log::Level::Info => "info",
        log::Level::Debug => "debug",
        log::Level::Trace => "trace",
    }
}

/// Install a [`LogBridge`] as the global `log` logger.
///
/// # Example
/// ```no_run
/// use proven_logger_console::{ConsoleRouter, compat::init_log_bridge};
/// use std::sync::Arc;
///
/// init_log_bridge(Arc::new(ConsoleRouter::default())).expect("Failed to set log bridge");
/// log::error!("written to stderr");
/// ```
pub fn init_log_bridge(transport: Arc<dyn Transport>) -> Result<(), log::SetLoggerError> {
    // log::set_logger requires a 'static logger
    let bridge = Box::leak(Box::new(LogBridge::new(transport)));
    log::set_logger(bridge)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
