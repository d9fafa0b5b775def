//! Bridge from `tracing` events into a [`Logging`] service.
//!
//! With the layer installed, `tracing::info!` and friends are filtered,
//! formatted, and written exactly like records from a [`Logger`](crate::Logger).

use cmdlog_types::Level;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, Layered, SubscriberExt};
use tracing_subscriber::Registry;

use crate::logging::Logging;
use crate::record::{Fields, LogRecord};

/// A subscriber that writes every event through one [`Logging`] service.
pub type LoggingSubscriber = Layered<LoggingLayer, Registry>;

/// `tracing_subscriber` layer that forwards events to a [`Logging`] service.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    logging: Arc<Logging>,
}

impl LoggingLayer {
    /// Forward events to `logging`.
    pub fn new(logging: Arc<Logging>) -> Self {
        Self { logging }
    }
}

impl<S> Layer<S> for LoggingLayer
where
    S: Subscriber,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The level can change at runtime, so never let tracing cache a verdict.
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logging.enabled(Level::from(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Level::from(*event.metadata().level());
        if !self.logging.enabled(level) {
            return;
        }

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        let record = LogRecord::new(level, visitor.message).with_fields(visitor.fields);
        self.logging.emit(&record);
    }
}

impl Logging {
    /// Layer forwarding events to this service.
    pub fn layer(self: &Arc<Self>) -> LoggingLayer {
        LoggingLayer::new(Arc::clone(self))
    }

    /// Registry with only this service's layer, for `set_global_default` or `with_default`.
    pub fn subscriber(self: &Arc<Self>) -> LoggingSubscriber {
        tracing_subscriber::registry().with(self.layer())
    }
}

/// Splits an event into its `message` and remaining fields.
#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: Fields,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for RecordVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.insert(field, Value::from(value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.message = text;
        } else {
            self.insert(field, Value::from(text));
        }
    }
}
