use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::RollingBuffer;

/// Receives each formatted line together with its level.
pub type Sink = Box<dyn Fn(&Level, &str) + Send + Sync>;

/// Layer that formats events into lines, forwards them to a sink and keeps
/// the latest ones in a [`RollingBuffer`].
pub struct RollingLayer {
    buffer: Arc<Mutex<RollingBuffer>>,
    sink: Option<Sink>,
    timestamps: bool,
}

impl RollingLayer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(RollingBuffer::new(capacity))),
            sink: None,
            timestamps: true,
        }
    }

    pub fn with_sink(mut self, sink: impl Fn(&Level, &str) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Omit the wall-clock prefix from formatted lines.
    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    pub fn handle(&self) -> LogHandle {
        LogHandle {
            buffer: Arc::clone(&self.buffer),
        }
    }

    fn format_line(&self, level: &Level, target: &str, visitor: &LineVisitor) -> String {
        let mut line = String::new();
        if self.timestamps {
            let _ = write!(line, "{} ", chrono::Utc::now().format("%H:%M:%S%.3f"));
        }
        let _ = write!(line, "{:>5} {}: {}{}", level, target, visitor.message, visitor.fields);
        line
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = self.format_line(meta.level(), meta.target(), &visitor);
        if let Some(sink) = &self.sink {
            sink(meta.level(), &line);
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }
}

/// Shared view of a layer's buffer.
#[derive(Clone)]
pub struct LogHandle {
    buffer: Arc<Mutex<RollingBuffer>>,
}

impl LogHandle {
    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer.lock().map(|b| b.lines()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
