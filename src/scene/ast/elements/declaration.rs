//! Declaration nodes
//!
//!     Declarations are the top-level constructs of a scene source:
//!
//!         declaration    := camera_decl | light_decl | object_decl
//!                         | material_decl | transform_decl
//!         camera_decl    := "camera" "{" property* "}"
//!         light_decl     := "light" "{" property* "}"
//!         object_decl    := shape_kind identifier? "{" property* "}"
//!         material_decl  := "material" identifier "{" property* "}"
//!         transform_decl := "transform" identifier? "{" property* "}"
//!
//!     Materials must be named because other declarations reference them;
//!     objects and transforms may be named. An empty property list `{}` is
//!     valid for every declaration kind.
//!
//!     [Declaration] is a closed enum over the five kinds so consumers match
//!     exhaustively; the grammar's node kinds are fixed at design time.

use super::super::range::Range;
use super::property::Property;
use serde::Serialize;
use std::fmt;

/// The shape of an object declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeKind {
    Sphere,
    Plane,
    Triangle,
}

impl ShapeKind {
    /// The keyword that introduces this shape in source text
    pub fn keyword(&self) -> &'static str {
        match self {
            ShapeKind::Sphere => "sphere",
            ShapeKind::Plane => "plane",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A top-level declaration, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Declaration {
    Camera(CameraDecl),
    Light(LightDecl),
    Object(ObjectDecl),
    Material(MaterialDecl),
    Transform(TransformDecl),
}

impl Declaration {
    /// The source extent of this declaration
    pub fn location(&self) -> &Range {
        match self {
            Declaration::Camera(decl) => &decl.location,
            Declaration::Light(decl) => &decl.location,
            Declaration::Object(decl) => &decl.location,
            Declaration::Material(decl) => &decl.location,
            Declaration::Transform(decl) => &decl.location,
        }
    }

    /// The properties in this declaration's body, in source order
    pub fn properties(&self) -> &[Property] {
        match self {
            Declaration::Camera(decl) => &decl.properties,
            Declaration::Light(decl) => &decl.properties,
            Declaration::Object(decl) => &decl.properties,
            Declaration::Material(decl) => &decl.properties,
            Declaration::Transform(decl) => &decl.properties,
        }
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties().iter().find(|p| p.name == name)
    }

    /// The node kind as a display name
    pub fn node_type(&self) -> &'static str {
        match self {
            Declaration::Camera(_) => "Camera",
            Declaration::Light(_) => "Light",
            Declaration::Object(_) => "Object",
            Declaration::Material(_) => "Material",
            Declaration::Transform(_) => "Transform",
        }
    }
}

/// A camera block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraDecl {
    pub properties: Vec<Property>,
    pub location: Range,
}

impl CameraDecl {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

/// A light block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightDecl {
    pub properties: Vec<Property>,
    pub location: Range,
}

impl LightDecl {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

/// A geometric object block: shape keyword, optional name, properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDecl {
    pub shape: ShapeKind,
    pub name: Option<String>,
    pub properties: Vec<Property>,
    pub location: Range,
}

impl ObjectDecl {
    pub fn new(shape: ShapeKind, name: Option<String>, properties: Vec<Property>) -> Self {
        Self {
            shape,
            name,
            properties,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

/// A named material block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialDecl {
    pub name: String,
    pub properties: Vec<Property>,
    pub location: Range,
}

impl MaterialDecl {
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

/// A transform block with an optional name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformDecl {
    pub name: Option<String>,
    pub properties: Vec<Property>,
    pub location: Range,
}

impl TransformDecl {
    pub fn new(name: Option<String>, properties: Vec<Property>) -> Self {
        Self {
            name,
            properties,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}
