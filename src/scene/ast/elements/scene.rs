//! The scene root node
//!
//!     A parsed source is rooted at a single SceneDecl which owns the
//!     top-level declarations in source order. The root is the sole entry
//!     point into the tree and owns it exclusively; dropping the root drops
//!     everything.

use super::super::range::Range;
use super::declaration::Declaration;
use serde::Serialize;

/// The root of a parsed scene: the ordered top-level declarations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDecl {
    pub declarations: Vec<Declaration>,
    pub location: Range,
}

impl SceneDecl {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self {
            declarations,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

impl Default for SceneDecl {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
