//! Property nodes
//!
//!     A property is a name = value entry inside a declaration body:
//!
//!         property := identifier "=" value ","?
//!
//!     The trailing comma is part of the lenient grammar: one optional comma
//!     may follow each property, including the last one in a block.
//!
//!     Examples:
//!         fov = 60
//!         position = (0, 1, -5),
//!         texture = "marble.png"

use super::super::range::Range;
use super::value::Value;
use serde::Serialize;
use std::fmt;

/// One name = value entry inside a declaration body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
    pub location: Range,
}

impl Property {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ast::range::{Position, Range};

    #[test]
    fn test_property_builder() {
        let location = Range::new(4..12, Position::new(1, 4), Position::new(1, 12));
        let property = Property::new("fov", Value::Number(60.0)).at(location.clone());

        assert_eq!(property.name, "fov");
        assert_eq!(property.value, Value::Number(60.0));
        assert_eq!(property.location, location);
    }

    #[test]
    fn test_property_display() {
        let property = Property::new("position", Value::Vector3([0.0, 1.0, -5.0]));
        assert_eq!(format!("{}", property), "position = (0, 1, -5)");
    }
}
