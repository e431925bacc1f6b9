//! Parse tree definitions and utilities for the scene description format
//!
//!     This module provides the parse tree node types, the position/range
//!     types used for location tracking, and the error and diagnostic types
//!     that the parser accumulates.
//!
//! Tree Shape
//!
//!     A parsed scene is a tree rooted at a single [SceneDecl](elements::SceneDecl)
//!     node which owns the ordered sequence of top-level declarations. Each
//!     declaration owns its property nodes, and each property owns its value.
//!     The tree is acyclic and strictly hierarchical: there are no back
//!     references, and ownership is exclusive from the root down, so handing
//!     the root to a caller hands over the entire tree.
//!
//!     The declaration kinds are fixed and exhaustively known (camera, light,
//!     object, material, transform), so [Declaration](elements::Declaration)
//!     is a closed enum rather than an open trait hierarchy. Consumers match
//!     on it exhaustively and the compiler flags any kind they forgot.
//!
//!     Nodes are constructed bottom-up during one parse invocation and never
//!     mutated afterwards; the parser returns the root as a single owned
//!     value and retains nothing.
//!
//! Location Tracking
//!
//!     The lexer produces tokens with byte spans into the source. A
//!     [SourceIndex](range::SourceIndex) converts byte offsets to line:column
//!     positions (one-time setup, O(log n) per conversion), so every token
//!     carries a full [Range](range::Range). The parser merges child ranges
//!     as it builds each node, giving every node the exact extent of the
//!     tokens that produced it. Error records copy these ranges so each
//!     reported problem points precisely at the offending text.

pub mod diagnostics;
pub mod elements;
pub mod error;
pub mod range;

// Re-export commonly used types at module root
pub use diagnostics::{Diagnostic, ErrorReporter, Severity};
pub use elements::{
    CameraDecl, Declaration, LightDecl, MaterialDecl, ObjectDecl, Property, SceneDecl, ShapeKind,
    TransformDecl, Value, ValueShape,
};
pub use error::{format_source_context, SyntaxError, SyntaxErrorKind};
pub use range::{Position, Range, SourceIndex};
