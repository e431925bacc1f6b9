//! Error collection and editor-facing diagnostics
//!
//!     The parser never aborts on an error; it records each one in an
//!     [ErrorReporter] and resumes at the next synchronization point. The
//!     reporter keeps errors strictly in encounter order and exposes the
//!     full sequence to the caller. It makes no formatting decisions beyond
//!     assembling the records; rendering to text is a caller concern.
//!
//!     [Diagnostic] is the structured view of an error for editor-style
//!     consumers: message, range, severity and a stable code per error kind.

use super::error::{SyntaxError, SyntaxErrorKind};
use super::range::Range;
use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Information => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

/// Structured diagnostic for editor consumption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub message: String,
    pub code: Option<String>,
    pub source: String,
}

impl Diagnostic {
    pub fn new(range: Range, severity: Severity, message: String) -> Self {
        Self {
            range,
            severity,
            message,
            code: None,
            source: "scene-parser".to_string(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} at {}",
            self.severity, self.source, self.message, self.range.start
        )
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(error: &SyntaxError) -> Self {
        let code = match error.kind {
            SyntaxErrorKind::Lexical => "lexical-error",
            SyntaxErrorKind::Syntax => "syntax-error",
            SyntaxErrorKind::ValueShape => "value-shape",
            SyntaxErrorKind::ValueRange => "value-range",
        };
        Diagnostic::new(
            error.location.clone(),
            Severity::Error,
            error.message.clone(),
        )
        .with_code(code)
    }
}

/// Ordered accumulator for the errors of one parse invocation
#[derive(Debug, Default)]
pub struct ErrorReporter {
    errors: Vec<SyntaxError>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error; order of calls is preserved
    pub fn report(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The recorded errors, in encounter order
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Consume the reporter, yielding the ordered error sequence
    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Editor-facing view of the recorded errors
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(Diagnostic::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ast::range::Position;

    fn mk_error(kind: SyntaxErrorKind, message: &str, line: usize) -> SyntaxError {
        SyntaxError::new(
            kind,
            message,
            "",
            Range::new(0..0, Position::new(line, 0), Position::new(line, 1)),
        )
    }

    #[test]
    fn test_reporter_preserves_order() {
        let mut reporter = ErrorReporter::new();
        reporter.report(mk_error(SyntaxErrorKind::Lexical, "first", 0));
        reporter.report(mk_error(SyntaxErrorKind::Syntax, "second", 2));
        reporter.report(mk_error(SyntaxErrorKind::ValueRange, "third", 5));

        assert_eq!(reporter.len(), 3);
        let errors = reporter.into_errors();
        assert_eq!(errors[0].message, "first");
        assert_eq!(errors[1].message, "second");
        assert_eq!(errors[2].message, "third");
    }

    #[test]
    fn test_diagnostic_from_error() {
        let error = mk_error(SyntaxErrorKind::ValueShape, "wrong shape", 1);
        let diagnostic = Diagnostic::from(&error);

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.message, "wrong shape");
        assert_eq!(diagnostic.code, Some("value-shape".to_string()));
        assert_eq!(diagnostic.source, "scene-parser");
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::from(&mk_error(SyntaxErrorKind::Syntax, "bad token", 3));
        assert_eq!(
            format!("{}", diagnostic),
            "error [scene-parser]: bad token at 3:0"
        );
    }

    #[test]
    fn test_empty_reporter() {
        let reporter = ErrorReporter::new();
        assert!(reporter.is_empty());
        assert_eq!(reporter.len(), 0);
        assert!(reporter.diagnostics().is_empty());
    }
}
