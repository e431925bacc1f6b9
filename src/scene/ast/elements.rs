//! Parse tree node definitions for the scene description format
//!
//!     This module defines the node types of the parse tree. It is the entry
//!     point for understanding how a scene source is structured after parsing.
//!
//! Node Kinds
//!
//!     - Scene: the root node, owning the ordered top-level declarations.
//!       See [scene](scene).
//!     - Declarations: camera, light, object (sphere/plane/triangle),
//!       material and transform blocks. See [declaration](declaration).
//!     - Properties: the name = value entries inside a declaration body.
//!       See [property](property).
//!     - Values: numbers, three-component vectors, strings and identifier
//!       references. See [value](value).
//!
//!     Identifier references are carried as names only; resolving them (for
//!     example an object naming its material) is a downstream concern, not
//!     part of this front end.
//!
//!     Every node has a required `location` field with the byte span and
//!     line:column extent of the tokens that produced it. Construction is
//!     `new(...)` followed by the `at(location)` builder; nodes are not
//!     mutated after that.

pub mod declaration;
pub mod property;
pub mod scene;
pub mod value;

// Re-export all node types
pub use declaration::{
    CameraDecl, Declaration, LightDecl, MaterialDecl, ObjectDecl, ShapeKind, TransformDecl,
};
pub use property::Property;
pub use scene::SceneDecl;
pub use value::{Value, ValueShape};
