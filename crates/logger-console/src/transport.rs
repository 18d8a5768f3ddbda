//! Base transport contract

use crate::completion::Completion;
use crate::error::Result;
use crate::record::LogRecord;

/// A destination for rendered log records.
///
/// Hosts call [`Transport::log`] once per record with the severity and
/// message already resolved.
pub trait Transport: Send + Sync + 'static {
    /// Short name identifying the transport
    fn name(&self) -> &str;

    /// Deliver a record, firing `on_complete` once it has been written
    fn log(&self, record: &LogRecord<'_>, on_complete: Option<Completion>) -> Result<()>;

    /// Flush any buffered output
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Convenience methods for logging a plain message at a standard severity
pub trait TransportExt: Transport {
    /// Log at `error`
    #[inline]
    fn error(&self, msg: &str) -> Result<()> {
        self.log(&LogRecord::new("error", msg), None)
    }

    /// Log at `warn`
    #[inline]
    fn warn(&self, msg: &str) -> Result<()> {
        self.log(&LogRecord::new("warn", msg), None)
    }

    /// Log at `info`
    #[inline]
    fn info(&self, msg: &str) -> Result<()> {
        self.log(&LogRecord::new("info", msg), None)
    }

    /// Log at `debug`
    #[inline]
    fn debug(&self, msg: &str) -> Result<()> {
        self.log(&LogRecord::new("debug", msg), None)
    }
}

// Implement for all transports
impl<T: Transport + ?Sized> TransportExt for T {}
