//! Non-fatal findings reported while decoding a number literal.

use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong with a literal's value.
///
/// Each kind has a fixed severity: the value is still produced, but an
/// [`Severity::Error`] means it is not the value the literal denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// `l`/`L` suffix on a literal that does not fit `i64`.
    LongOverflow,
    /// `f`/`F` suffix on a literal whose value is infinite.
    FloatOverflow,
    /// No suffix, and the value fits neither `i64` nor a finite `f64`.
    Unrepresentable,
    /// Integer-form literal too wide for `i64`, decoded as `f64` instead.
    IntegerFallback,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            DiagnosticKind::IntegerFallback => Severity::Warning,
            DiagnosticKind::LongOverflow
            | DiagnosticKind::FloatOverflow
            | DiagnosticKind::Unrepresentable => Severity::Error,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            DiagnosticKind::LongOverflow => "Number literal cannot fit into 64-bit integer type.",
            DiagnosticKind::FloatOverflow => {
                "Number literal cannot fit into double precision floating point type."
            }
            DiagnosticKind::Unrepresentable => {
                "Number literal cannot fit into either 64-bit integer type or double precision floating point type."
            }
            DiagnosticKind::IntegerFallback => {
                "Number literal is written in integer form but cannot fit in 64-bit integer type. \
                 Fallback to interpret it as a double precision floating point value instead."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    span: Range<usize>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    #[must_use]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Byte range of the offending literal in the scanned input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Report this diagnostic through `tracing` at its own level.
    pub(crate) fn emit(&self, literal: &str) {
        let message = self.kind.message();
        match self.severity() {
            Severity::Warning => tracing::warn!(
                literal,
                start = self.span.start,
                end = self.span.end,
                "{message}"
            ),
            Severity::Error => tracing::error!(
                literal,
                start = self.span.start,
                end = self.span.end,
                "{message}"
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.kind.message())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use insta::assert_snapshot;
    use tracing::field::{Field, Visit};
    use tracing::subscriber::with_default;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry;

    use super::{Diagnostic, DiagnosticKind, Severity};

    type Captured = Arc<Mutex<Vec<(Level, String)>>>;

    struct CaptureLayer(Captured);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .lock()
                .expect("capture lock")
                .push((*event.metadata().level(), visitor.0));
        }
    }

    fn capture_events(f: impl FnOnce()) -> Vec<(Level, String)> {
        let captured = Captured::default();
        let subscriber = registry().with(CaptureLayer(Arc::clone(&captured)));
        with_default(subscriber, f);
        captured.lock().expect("capture lock").clone()
    }

    #[test]
    fn only_integer_fallback_is_a_warning() {
        assert_eq!(DiagnosticKind::IntegerFallback.severity(), Severity::Warning);
        for kind in [
            DiagnosticKind::LongOverflow,
            DiagnosticKind::FloatOverflow,
            DiagnosticKind::Unrepresentable,
        ] {
            assert_eq!(kind.severity(), Severity::Error, "{kind:?}");
        }
    }

    #[test]
    fn renders_severity_then_message() {
        let diag = Diagnostic::new(DiagnosticKind::Unrepresentable, 0..32);
        assert!(diag.is_error());
        assert_eq!(diag.span(), 0..32);
        assert_snapshot!(
            diag.to_string(),
            @"error: Number literal cannot fit into either 64-bit integer type or double precision floating point type."
        );
    }

    #[test]
    fn fallback_message_is_one_sentence_pair() {
        let diag = Diagnostic::new(DiagnosticKind::IntegerFallback, 3..30);
        assert!(!diag.is_error());
        assert_snapshot!(
            diag.to_string(),
            @"warning: Number literal is written in integer form but cannot fit in 64-bit integer type. Fallback to interpret it as a double precision floating point value instead."
        );
    }

    #[test]
    fn emits_at_its_own_level() {
        let events = capture_events(|| {
            Diagnostic::new(DiagnosticKind::IntegerFallback, 0..19).emit("9223372036854775808");
            Diagnostic::new(DiagnosticKind::LongOverflow, 0..20).emit("9223372036854775808L");
        });
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, Level::WARN);
        assert_eq!(events[0].1, DiagnosticKind::IntegerFallback.message());
        assert_eq!(events[1].0, Level::ERROR);
        assert_eq!(events[1].1, DiagnosticKind::LongOverflow.message());
    }

    #[test]
    fn scanning_emits_each_diagnostic() {
        let events = capture_events(|| {
            let decoded = crate::scan("5828763487625083458629476e+54625").expect("literal");
            assert_eq!(decoded.diagnostics().len(), 1);
        });
        let levels: Vec<Level> = events.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![Level::ERROR]);
        assert_eq!(events[0].1, DiagnosticKind::Unrepresentable.message());
    }
}
