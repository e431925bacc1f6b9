//! Token definitions for the scene description format
//!
//!     This module defines the tokens produced by the scene lexer. A token is
//!     the minimal lexical unit: a kind, the matched source text, and the
//!     location of that text.
//!
//!     Terminal recognition is driven by the logos derive macro. Keyword
//!     variants carry no logos patterns on purpose: keywords are matched as
//!     identifiers first (maximal munch) and then reclassified by the lexer
//!     against the keyword set in [grammar](crate::scene::parsing::grammar).
//!     This keeps a single lexical path for identifiers and keywords instead
//!     of competing patterns.
//!
//!     `Eof` and `Error` are likewise synthetic: logos never produces them
//!     directly. The lexer substitutes `Error` for input logos rejects and
//!     emits `Eof` forever once the input is exhausted.

use crate::scene::ast::range::Range;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible token kinds in the scene description format
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum TokenKind {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,

    /// Numeric literal: optional sign, digits, optional fraction and exponent
    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    /// Digits followed by a dot with no fractional digits, e.g. "1."
    #[regex(r"[+-]?[0-9]+\.")]
    MalformedNumber,

    /// Double-quoted string; backslash-quote passes through verbatim
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    StringLit,

    /// Identifier; the lexer reclassifies these as keywords where they match
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    // Keyword variants, resolved from identifiers by keyword lookup
    Camera,
    Light,
    Material,
    Transform,
    Sphere,
    Plane,
    Triangle,

    // Synthetic markers, never produced by logos
    Eof,
    Error,
}

impl TokenKind {
    /// Check if this kind is one of the scene language keywords
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Camera
                | TokenKind::Light
                | TokenKind::Material
                | TokenKind::Transform
                | TokenKind::Sphere
                | TokenKind::Plane
                | TokenKind::Triangle
        )
    }

    /// Human-readable name used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Equals => "'='",
            TokenKind::Number => "a number",
            TokenKind::MalformedNumber => "a malformed number",
            TokenKind::StringLit => "a string",
            TokenKind::Identifier => "an identifier",
            TokenKind::Camera => "'camera'",
            TokenKind::Light => "'light'",
            TokenKind::Material => "'material'",
            TokenKind::Transform => "'transform'",
            TokenKind::Sphere => "'sphere'",
            TokenKind::Plane => "'plane'",
            TokenKind::Triangle => "'triangle'",
            TokenKind::Eof => "end of input",
            TokenKind::Error => "an unrecognized character",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// One lexical unit: kind, matched source text, and its location.
///
/// Tokens are immutable once produced. The lexer creates them on demand and
/// the parser consumes each exactly once; only error records copy positions
/// out of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: Range,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: Range) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Check the token kind without consuming the token
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} '{}'", self.kind, self.lexeme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ast::range::Range;

    #[test]
    fn test_keyword_predicate() {
        assert!(TokenKind::Camera.is_keyword());
        assert!(TokenKind::Triangle.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::OpenBrace.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", TokenKind::OpenBrace), "'{'");
        assert_eq!(format!("{}", TokenKind::Number), "a number");
        assert_eq!(format!("{}", TokenKind::Eof), "end of input");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "fov", Range::default());
        assert_eq!(format!("{}", token), "an identifier 'fov'");

        let eof = Token::new(TokenKind::Eof, "", Range::default());
        assert_eq!(format!("{}", eof), "end of input");
    }

    #[test]
    fn test_token_is() {
        let token = Token::new(TokenKind::Comma, ",", Range::default());
        assert!(token.is(TokenKind::Comma));
        assert!(!token.is(TokenKind::Equals));
    }
}
