//! Completion signal fired after a record is written

use std::fmt;
use tokio::sync::oneshot;

/// Notifies the host that one record has been written.
///
/// Either a plain callback, or a oneshot channel the host can `.await`.
pub enum Completion {
    /// Run a callback
    Callback(Box<dyn FnOnce() + Send + 'static>),
    /// Send `()` on a oneshot channel
    Notify(oneshot::Sender<()>),
}

impl Completion {
    /// Wrap a callback
    pub fn callback(f: impl FnOnce() + Send + 'static) -> Self {
        Self::Callback(Box::new(f))
    }

    /// Create a completion paired with a receiver that resolves once it fires
    pub fn channel() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self::Notify(tx), rx)
    }

    /// Fire the signal. Consumes `self`, so it can only happen once.
    pub fn signal(self) {
        match self {
            Self::Callback(f) => f(),
            Self::Notify(tx) => {
                // The host may have stopped waiting
                let _ = tx.send(());
            }
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("Completion::Callback"),
            Self::Notify(_) => f.write_str("Completion::Notify"),
        }
    }
}
