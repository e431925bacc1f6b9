//! Lexer for the scene description format
//!
//!     The lexer converts source text into a lazy, finite, non-restartable
//!     sequence of tokens. Each call to [Lexer::next_token] advances the
//!     position; re-scanning the same text requires a fresh Lexer. Once the
//!     input is exhausted every further call returns an `Eof` token, so the
//!     parser's one-token lookahead never runs off the end.
//!
//!     Raw matching is handled entirely by the logos patterns on
//!     [TokenKind](crate::scene::token::TokenKind): whitespace and `//` and
//!     `/* */` comments are skipped without emitting tokens, numbers are
//!     lexed as a single maximal token, strings keep their quotes in the
//!     lexeme. Two decisions happen here rather than in logos:
//!
//!         - Keyword resolution: identifiers are matched by one maximal-munch
//!           rule and then looked up in the keyword set; keyword tokens win
//!           over plain identifiers. There are no separate lexical paths.
//!         - Error substitution: input logos rejects becomes an `Error` token
//!           carrying the offending text, and scanning continues. Reporting
//!           the error is the consumer's job, so re-lexing is side-effect
//!           free and deterministic.
//!
//!     Tokens carry a full [Range](crate::scene::ast::range::Range): the
//!     byte span from logos plus line:column positions computed through a
//!     [SourceIndex](crate::scene::ast::range::SourceIndex) built once per
//!     lexer. A Lexer owns no external resources and shares no state; one
//!     instance serves one logical parse on one thread.

use crate::scene::ast::range::SourceIndex;
use crate::scene::parsing::grammar::KEYWORDS;
use crate::scene::token::{Token, TokenKind};
use logos::Logos;

/// Pull-based lexer over one source text
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    index: SourceIndex,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            index: SourceIndex::new(source),
        }
    }

    /// Produce the next token, advancing the lexer position.
    ///
    /// Returns an `Eof` token positioned at the end of the source once the
    /// input is exhausted, and keeps returning it on every further call.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            None => {
                let end = self.source.len();
                Token::new(TokenKind::Eof, "", self.index.range(end..end))
            }
            Some(result) => {
                let lexeme = self.inner.slice();
                let location = self.index.range(self.inner.span());
                let kind = match result {
                    Err(()) => TokenKind::Error,
                    Ok(TokenKind::Identifier) => KEYWORDS
                        .get(lexeme)
                        .copied()
                        .unwrap_or(TokenKind::Identifier),
                    Ok(kind) => kind,
                };
                Token::new(kind, lexeme, location)
            }
        }
    }
}

/// Collect the full token stream for a source, including the trailing `Eof`.
///
/// Convenience for tests and tooling; the parser pulls tokens one at a time.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}
