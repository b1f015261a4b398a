//! Shared test utilities used across tsunagi crates.

pub mod tracing {
    //! Recording layer that captures spans and events so tests can assert on
    //! the instrumentation emitted by graph generation and the MST engine.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Structured fields keyed by field name, with values rendered as text.
    pub type Fields = HashMap<String, String>;

    /// Layer installed during tests to record closed spans and emitted events.
    ///
    /// # Examples
    /// ```
    /// use tracing_subscriber::layer::SubscriberExt;
    /// use tsunagi_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("demo", nodes = 3).entered();
    ///     tracing::info!(attempts = 1, "done");
    /// });
    ///
    /// let span = layer.span_named("demo").expect("span closed");
    /// assert_eq!(span.field("nodes"), Some("3"));
    /// assert_eq!(layer.events_at(tracing::Level::INFO).len(), 1);
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            lock(&self.spans)
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns every event emitted at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot of a closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields set at creation or recorded later through `Span::record`.
        pub fields: Fields,
    }

    impl SpanRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Fields attached to the event, including `message`.
        pub fields: Fields,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`, if present.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }

        /// Returns the event message, if present.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    struct OpenSpan {
        name: String,
        fields: Fields,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut open = OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields: Fields::new(),
            };
            attrs.record(&mut FieldVisitor(&mut open.fields));
            span.extensions_mut().insert(open);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(open) = extensions.get_mut::<OpenSpan>() {
                values.record(&mut FieldVisitor(&mut open.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: open.name,
                fields: open.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldVisitor(&mut fields));
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    /// Renders every field as text; strings are stored without quotes.
    struct FieldVisitor<'a>(&'a mut Fields);

    impl Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }
}

pub mod ci;
