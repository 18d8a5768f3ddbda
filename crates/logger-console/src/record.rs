//! Log record handed to a transport

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A fully rendered log record.
///
/// Both fields are resolved by the caller before the record reaches a
/// transport; the transport never formats anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord<'a> {
    /// Severity label, e.g. `"error"` or `"info"`
    pub severity: Cow<'a, str>,
    /// Rendered message, ready for output
    pub message: Cow<'a, str>,
}

impl<'a> LogRecord<'a> {
    /// Create a new record
    #[inline]
    pub fn new(severity: impl Into<Cow<'a, str>>, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            severity: severity.into(),
            message: message.into(),
        }
    }

    /// Convert to an owned record (for sending across threads)
    pub fn into_owned(self) -> LogRecord<'static> {
        LogRecord {
            severity: Cow::Owned(self.severity.into_owned()),
            message: Cow::Owned(self.message.into_owned()),
        }
    }
}
