//! Bridges from the `log` and `tracing` facades to a [`Transport`](crate::Transport)

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

#[cfg(feature = "log-compat")]
pub use log_bridge::{LogBridge, init_log_bridge};

#[cfg(feature = "tracing-compat")]
pub use tracing_bridge::{TracingBridge, init_tracing_bridge};

/// Route both `log` and `tracing` events into one transport
#[cfg(all(feature = "log-compat", feature = "tracing-compat"))]
pub fn init_with_bridges(
    transport: std::sync::Arc<dyn crate::Transport>,
) -> Result<(), Box<dyn std::error::Error>> {
    init_log_bridge(transport.clone())?;
    init_tracing_bridge(transport)?;
    Ok(())
}
