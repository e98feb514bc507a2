//! A [Layer] that records every event it sees, so tests can assert on what was logged.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{
    field::{Field, Visit},
    Dispatch, Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer, Registry,
};

/// A single event recorded by the [CapturingLayer].
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
    pub(crate) level: Level,
    pub(crate) message: String,
    pub(crate) fields: HashMap<&'static str, String>,
}

impl CapturedEvent {
    /// Returns the formatted value of the field `name`, if the event carried it.
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CapturingLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturingLayer {
    /// Returns a [Dispatch] that sends all events to this layer.
    pub(crate) fn dispatch(&self) -> Dispatch {
        Dispatch::new(Registry::default().with(self.clone()))
    }

    pub(crate) fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the first event with the given level and message.
    pub(crate) fn find(&self, level: Level, message: &str) -> Option<CapturedEvent> {
        self.events()
            .into_iter()
            .find(|e| e.level == level && e.message == message)
    }

    pub(crate) fn count(&self, level: Level, message: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.level == level && e.message == message)
            .count()
    }
}

impl<S: Subscriber> Layer<S> for CapturingLayer {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: HashMap<&'static str, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_debug(field, &format_args!("{value}"))
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{value:?}");
        match field.name() {
            "message" => self.message = value,
            name => {
                self.fields.insert(name, value);
            }
        }
    }
}
