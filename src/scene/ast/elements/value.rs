//! Value nodes
//!
//!     A value is the right-hand side of a property. The grammar allows four
//!     shapes:
//!
//!         value   := number | vector3 | string | identifier
//!         vector3 := "(" number "," number "," number ")"
//!
//!     Identifier values are references to names declared elsewhere (for
//!     example a material name); this front end records the name and leaves
//!     resolution to downstream consumers.
//!
//!     `Invalid` is the placeholder recorded when a property's value failed
//!     shape checking or lexed as an error token. The property node is still
//!     produced so recovery keeps the surrounding declaration intact.

use serde::Serialize;
use std::fmt;

/// A property value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Number(f64),
    Vector3([f64; 3]),
    Str(String),
    /// A reference to a name declared elsewhere, resolved downstream
    Reference(String),
    /// Placeholder for a value that failed shape checking or lexing
    Invalid,
}

impl Value {
    /// The shape of this value, if it has one
    pub fn shape(&self) -> Option<ValueShape> {
        match self {
            Value::Number(_) => Some(ValueShape::Number),
            Value::Vector3(_) => Some(ValueShape::Vector3),
            Value::Str(_) => Some(ValueShape::Str),
            Value::Reference(_) => Some(ValueShape::Reference),
            Value::Invalid => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Vector3([x, y, z]) => write!(f, "({}, {}, {})", x, y, z),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Reference(name) => write!(f, "{}", name),
            Value::Invalid => write!(f, "<invalid>"),
        }
    }
}

/// The closed set of value shapes, used by the property shape table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueShape {
    Number,
    Vector3,
    Str,
    Reference,
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueShape::Number => "number",
            ValueShape::Vector3 => "vector",
            ValueShape::Str => "string",
            ValueShape::Reference => "identifier",
        };
        write!(f, "{}", name)
    }
}
