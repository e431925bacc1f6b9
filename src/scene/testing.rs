//! Test support for the scene parser
//!
//!     Factory helpers shared by the unit tests and the integration tests
//!     under tests/. Lexer tests assert exact token sequences; these helpers
//!     keep those assertions readable.

use crate::scene::ast::elements::SceneDecl;
use crate::scene::ast::range::{Position, Range};
use crate::scene::parsing::parse_scene;
use crate::scene::token::{Token, TokenKind};

/// Build a token on line zero; columns equal byte offsets.
///
/// Suitable for single-line sources, which is what exact-sequence lexer
/// tests use.
pub fn mk_token(kind: TokenKind, lexeme: &str, start: usize, end: usize) -> Token {
    Token::new(
        kind,
        lexeme,
        Range::new(start..end, Position::new(0, start), Position::new(0, end)),
    )
}

/// Build a token sequence from (kind, lexeme, start, end) tuples
pub fn mk_tokens(entries: &[(TokenKind, &str, usize, usize)]) -> Vec<Token> {
    entries
        .iter()
        .map(|(kind, lexeme, start, end)| mk_token(*kind, lexeme, *start, *end))
        .collect()
}

/// Parse source that must produce no errors, panicking otherwise
pub fn parse_clean(source: &str) -> SceneDecl {
    let outcome = parse_scene(source);
    assert!(
        outcome.errors.is_empty(),
        "expected a clean parse, got errors: {:?}",
        outcome.errors
    );
    outcome.scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mk_token_positions() {
        let token = mk_token(TokenKind::Number, "60", 15, 17);
        assert_eq!(token.location.span, 15..17);
        assert_eq!(token.location.start, Position::new(0, 15));
        assert_eq!(token.location.end, Position::new(0, 17));
    }

    #[test]
    fn test_parse_clean_accepts_valid_source() {
        let scene = parse_clean("camera {}");
        assert_eq!(scene.len(), 1);
    }

    #[test]
    #[should_panic(expected = "expected a clean parse")]
    fn test_parse_clean_panics_on_errors() {
        parse_clean("bogus {}");
    }
}
