//! Bridge from tracing to a transport

use crate::{LogRecord, Transport};
use std::fmt::{self, Write};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that renders each event and hands it to a transport
pub struct TracingBridge {
    transport: Arc<dyn Transport>,
}

impl TracingBridge {
    /// Create a new tracing bridge
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

impl<S> Layer<S> for TracingBridge
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let spans: Vec<&str> = ctx
            .event_scope(event)
            .map(|scope| scope.from_root().map(|span| span.name()).collect::<Vec<_>>())
            .unwrap_or_default();

        let message = if spans.is_empty() {
            visitor.finish()
        } else {
            format!("{}: {}", spans.join("::"), visitor.finish())
        };

        let record = LogRecord::new(severity_label(event.metadata().level()), message);

        // Layers have no error channel
        let _ = self.transport.log(&record, None);
    }
}

/// Lowercase severity label for a tracing level
pub fn severity_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        _ => "trace",
    }
}

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

/// Install a registry with a [`TracingBridge`] as the global subscriber.
///
/// # Example
/// ```no_run
/// use proven_logger_console::{ConsoleRouter, compat::init_tracing_bridge};
/// use std::sync::Arc;
///
/// init_tracing_bridge(Arc::new(ConsoleRouter::default())).expect("Failed to set tracing bridge");
/// tracing::info!("written to stdout");
/// ```
pub fn init_tracing_bridge(transport: Arc<dyn Transport>) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::prelude::*;

    // Set the dispatcher directly; `try_init` would also claim the `log` facade
    let subscriber = tracing_subscriber::registry().with(TracingBridge::new(transport));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
