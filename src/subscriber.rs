use std::any::TypeId;
use std::convert::TryFrom;
use std::fmt;
use std::io;
use std::sync::Mutex;

use chrono::Utc;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layered, SubscriberExt};
use tracing_subscriber::registry::Registry;
use tracing_subscriber::Layer;

use crate::event::LogEntry;
use crate::formatter::LogFmt;
use crate::severity::Severity;

/// Subscriber that renders tag-stamped events as single lines.
///
/// The sink sits behind a mutex, so lines from concurrent threads come out
/// whole. Writes happen inline on the logging thread; there is no buffering.
pub struct FbLogSubscriber {
    inner: Layered<FbLogLayer, Registry>,
}

pub struct FbLogLayer {
    fmt: LogFmt,
    writer: Mutex<Box<dyn io::Write + Send>>,
}

impl FbLogSubscriber {
    /// Logcat-style lines on stderr.
    pub fn pretty() -> Self {
        Self::with_writer(LogFmt::Pretty, io::stderr())
    }

    /// One JSON object per line on stderr.
    pub fn json() -> Self {
        Self::with_writer(LogFmt::Json, io::stderr())
    }

    pub fn with_writer<W>(fmt: LogFmt, writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        FbLogSubscriber {
            inner: Registry::default().with(FbLogLayer {
                fmt,
                writer: Mutex::new(Box::new(writer)),
            }),
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    tag: Option<String>,
    severity: Option<u64>,
    message: Option<String>,
}

impl Visit for EventVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "severity" {
            self.severity = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "tag" {
            self.tag = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

impl FbLogLayer {
    fn log_event(&self, event: &Event) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        // Events from foreign macros carry no severity field; fall back to
        // the one implied by their level.
        let severity = visitor
            .severity
            .and_then(|raw| Severity::try_from(raw).ok())
            .unwrap_or_else(|| Severity::from_level(event.metadata().level()));

        let entry = LogEntry {
            timestamp: Utc::now(),
            severity,
            tag: visitor.tag.as_deref().unwrap_or(""),
            message: visitor.message.as_deref().unwrap_or(""),
        };

        // A sink that errors or is poisoned drops the line.
        if let Ok(mut writer) = self.writer.lock() {
            let _ = self.fmt.format_event(&entry, &mut *writer);
        }
    }
}

impl Layer<Registry> for FbLogLayer {
    fn on_event(&self, event: &Event, _ctx: Context<Registry>) {
        self.log_event(event)
    }
}

impl Subscriber for FbLogSubscriber {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn max_level_hint(&self) -> Option<tracing::metadata::LevelFilter> {
        self.inner.max_level_hint()
    }

    fn new_span(&self, span: &Attributes) -> Id {
        self.inner.new_span(span)
    }

    fn record(&self, span: &Id, values: &Record) {
        self.inner.record(span, values)
    }

    fn record_follows_from(&self, span: &Id, follows: &Id) {
        self.inner.record_follows_from(span, follows)
    }

    fn event(&self, event: &Event) {
        self.inner.event(event)
    }

    fn enter(&self, span: &Id) {
        self.inner.enter(span)
    }

    fn exit(&self, span: &Id) {
        self.inner.exit(span)
    }

    fn clone_span(&self, id: &Id) -> Id {
        self.inner.clone_span(id)
    }

    fn try_close(&self, id: Id) -> bool {
        self.inner.try_close(id)
    }

    unsafe fn downcast_raw(&self, id: TypeId) -> Option<*const ()> {
        if id == TypeId::of::<Self>() {
            Some(self as *const Self as *const ())
        } else {
            self.inner.downcast_raw(id)
        }
    }
}
