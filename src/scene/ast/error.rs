//! Error types for lexing and parsing

use crate::scene::ast::range::Range;
use serde::Serialize;
use std::fmt;

/// Classification of the errors the front end produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxErrorKind {
    /// Unrecognized character or malformed literal
    Lexical,
    /// Token sequence matching no grammar alternative at this position
    Syntax,
    /// Grammar-valid value with the wrong shape for a well-known property
    ValueShape,
    /// Numeric literal outside the representable range
    ValueRange,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyntaxErrorKind::Lexical => "lexical error",
            SyntaxErrorKind::Syntax => "syntax error",
            SyntaxErrorKind::ValueShape => "value shape error",
            SyntaxErrorKind::ValueRange => "value range error",
        };
        write!(f, "{}", name)
    }
}

/// One recorded error with the position of the offending text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub lexeme: String,
    pub location: Range,
}

impl SyntaxError {
    pub fn new(
        kind: SyntaxErrorKind,
        message: impl Into<String>,
        lexeme: impl Into<String>,
        location: Range,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Line of the offending text (zero-based)
    pub fn line(&self) -> usize {
        self.location.start.line
    }

    /// Column of the offending text (zero-based)
    pub fn column(&self) -> usize {
        self.location.start.column
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.kind, self.location.start, self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Format source text context around an error location
///
/// Shows 2 lines before the error, the error line with a >> marker, and 2
/// lines after. Lines are numbered 1-based for display.
pub fn format_source_context(source: &str, range: &Range) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = range.start.line;

    let first = error_line.saturating_sub(2);
    let last = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for line_num in first..last {
        let marker = if line_num == error_line { ">>" } else { "  " };

        if line_num < lines.len() {
            context.push_str(&format!(
                "{} {:3} | {}\n",
                marker,
                line_num + 1,
                lines[line_num]
            ));
        }
    }

    context
}
