//! Console transport that routes log records by severity
//!
//! Each record is written to stdout, or to stderr when its severity label
//! is one of the configured error severities (`{"error"}` by default). An
//! optional prefix is prepended as `"<prefix>: "`.
//!
//! The output streams are injected [`Sink`]s, so the same router can write
//! to the process streams or to in-memory buffers in tests. Records from
//! the `log` and `tracing` facades can be fed in through the bridges in
//! [`compat`].
//!
//! # Example
//! ```
//! use proven_logger_console::{ConsoleConfig, ConsoleRouter, LogRecord};
//!
//! let router = ConsoleRouter::new(
//!     ConsoleConfig::builder()
//!         .stderr_levels(["error", "warn"])
//!         .prefix("app")
//!         .build(),
//! );
//!
//! router.emit(&LogRecord::new("info", "started"), None)?;
//! # Ok::<(), proven_logger_console::Error>(())
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod completion;
mod config;
mod error;
mod record;
mod router;
mod severity;
mod sink;
mod transport;

pub mod compat;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use completion::Completion;
pub use config::{ConsoleConfig, ConsoleConfigBuilder};
pub use error::{Error, Result};
pub use record::LogRecord;
pub use router::ConsoleRouter;
pub use severity::{DEFAULT_ERROR_SEVERITIES, SeveritySet, to_severity_set};
pub use sink::{Sink, StdStream};
pub use transport::{Transport, TransportExt};
