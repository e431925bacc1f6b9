//! # scene
//!
//! A parser for the scene description format.
//!
//! The crate is a pure front end: it turns scene source text into a typed
//! parse tree plus an ordered list of syntax errors. It performs no I/O and
//! no semantic interpretation; opening files and consuming the tree (for
//! rendering or analysis) are caller concerns.
//!
//! The pipeline is two stages with one shared data model:
//!
//!   - Lexing: pull-based tokenization of source text. See [lexing](scene::lexing).
//!   - Parsing: recursive descent over the token stream, one function per
//!     nonterminal, building the tree bottom-up. See [parsing](scene::parsing).
//!   - The parse tree and the error/diagnostic types live in [ast](scene::ast).
//!
//! Errors never abort a parse. The parser records each one and resumes at the
//! next declaration keyword, so a single pass over a broken file reports every
//! independent problem and still returns the declarations that survived.

#![allow(rustdoc::invalid_html_tags)]

pub mod scene;
