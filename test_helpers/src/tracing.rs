//! Utilities for asserting on emitted tracing events.

use std::{fmt, sync::Arc};

use observability_deps::tracing::{
    self, Event,
    field::Field,
    span::{Attributes, Id, Record},
    subscriber::{DefaultGuard, Subscriber},
};
use parking_lot::Mutex;

type SharedLines = Arc<Mutex<Vec<String>>>;

/// Captures tracing events as formatted `level message k=v ...` lines, so
/// tests can verify that diagnostics are making it to the logs.
///
/// Upon creation it registers itself as the thread-default subscriber; the
/// registration is undone when the capture is dropped.
#[derive(Debug)]
pub struct LogCapture {
    lines: SharedLines,

    /// Uninstalls the subscriber on drop.
    _guard: DefaultGuard,

    /// See <https://github.com/tokio-rs/tracing/issues/2874>.
    _dont_drop_me: tracing::Dispatch,
}

impl LogCapture {
    /// Create a new capture and register it in the current thread.
    #[expect(clippy::new_without_default)]
    #[must_use]
    pub fn new() -> Self {
        let _dont_drop_me = tracing::Dispatch::new(tracing::subscriber::NoSubscriber::new());

        let lines = SharedLines::default();
        let subscriber = LogCaptureSubscriber {
            lines: Arc::clone(&lines),
        };
        let guard = tracing::subscriber::set_default(subscriber);

        Self {
            lines,
            _guard: guard,
            _dont_drop_me,
        }
    }

    /// Captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether any captured line contains `fragment`.
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(fragment))
    }
}

impl fmt::Display for LogCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }

        Ok(())
    }
}

struct LogCaptureSubscriber {
    lines: SharedLines,
}

impl Subscriber for LogCaptureSubscriber {
    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let mut line = format!("{} {}", event.metadata().level(), visitor.message);
        for field in visitor.fields {
            line.push(' ');
            line.push_str(&field);
        }

        self.lines.lock().push(line);
    }

    fn enter(&self, _span: &Id) {}
    fn exit(&self, _span: &Id) {}
}

#[derive(Debug, Default)]
struct LineVisitor {
    message: String,
    fields: Vec<String>,
}

impl tracing::field::Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.push(format!("{}={value}", field.name()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.push(format!("{}={value}", field.name()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.push(format!("{}={value}", field.name()));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.push(format!("{}={value}", field.name()));
    }
}

#[cfg(test)]
mod tests {
    use observability_deps::tracing::{debug, info};

    use super::*;

    #[test]
    fn captures_events_with_fields() {
        let capture = LogCapture::new();

        debug!(name = "users", paused = false, "created queue");
        info!("plain message");

        assert_eq!(
            capture.lines(),
            vec![
                "DEBUG created queue name=users paused=false".to_owned(),
                "INFO plain message".to_owned(),
            ]
        );
        assert!(capture.contains("name=users"));
        assert!(!capture.contains("nope"));
    }

    #[test]
    fn display_joins_lines() {
        let capture = LogCapture::new();

        debug!("one");
        debug!("two");

        assert_eq!(capture.to_string(), "DEBUG one\nDEBUG two");
    }

    #[test]
    fn unregisters_on_drop() {
        let outer = LogCapture::new();

        {
            let inner = LogCapture::new();
            debug!("inner event");
            assert!(inner.contains("inner event"));
        }

        debug!("outer event");
        assert!(outer.contains("outer event"));
        assert!(!outer.contains("inner event"));
    }
}
