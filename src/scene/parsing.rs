//! Parsing module for the scene description format
//!
//!     This module turns a token stream into the parse tree:
//!
//!         1. Lexing: tokenization of source text. See [lexing](crate::scene::lexing).
//!         2. Parsing: recursive descent over the token stream, one function
//!            per nonterminal, building nodes bottom-up. See [parser](parser).
//!
//!     The grammar itself (productions, keyword set, synchronization set and
//!     property shape table) is kept as a single reviewable artifact in the
//!     [grammar](grammar) module; the parser functions realize it by hand.
//!
//! Error Recovery
//!
//!     A syntax error never aborts parsing of sibling declarations. Each
//!     error is recorded and the parser skips tokens until the next
//!     declaration-starting keyword (panic-mode recovery), so one pass over
//!     a broken file reports every independent error. The only fatal
//!     condition is exhausting the input mid-recovery, which simply ends the
//!     parse with the partial tree and all collected errors.
//!
//!     Because of this, the outcome always carries a tree. Callers that want
//!     strict behavior collapse it with [ParseOutcome::into_result]; tooling
//!     callers (editor diagnostics) keep the partial tree and the errors.

pub mod grammar;
pub mod parser;

pub use parser::Parser;

use crate::scene::ast::elements::SceneDecl;
use crate::scene::ast::error::SyntaxError;

/// Result of one parse invocation: the tree that survived plus every error
/// collected along the way, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub scene: SceneDecl,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutcome {
    /// True when the parse produced no errors at all
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a Result for callers that reject any-error parses
    pub fn into_result(self) -> Result<SceneDecl, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.scene)
        } else {
            Err(self.errors)
        }
    }
}

/// Parse one scene source text. Primary entry point of the crate.
pub fn parse_scene(source: &str) -> ParseOutcome {
    Parser::new(source).parse()
}
