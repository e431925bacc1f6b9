//! The grammar artifact for the scene description format
//!
//!     The parser is hand-written recursive descent, but the grammar is kept
//!     here as a single reviewable artifact: the productions, the keyword
//!     set, the synchronization set and the property shape table. The parser
//!     functions in [parser](super::parser) realize these productions one to
//!     one.
//!
//! Productions
//!
//!     scene          := declaration* EOF
//!     declaration    := camera_decl | light_decl | object_decl
//!                     | material_decl | transform_decl
//!     camera_decl    := "camera" "{" property* "}"
//!     light_decl     := "light" "{" property* "}"
//!     object_decl    := shape_kind identifier? "{" property* "}"
//!     shape_kind     := "sphere" | "plane" | "triangle"
//!     material_decl  := "material" identifier "{" property* "}"
//!     transform_decl := "transform" identifier? "{" property* "}"
//!     property       := identifier "=" value ","?
//!     value          := number | vector3 | string | identifier
//!     vector3        := "(" number "," number "," number ")"
//!
//!     The grammar is LL(1): at every declaration boundary the keyword set is
//!     checked first, which resolves the ambiguity between identifier values
//!     and keyword-prefixed declarations. Trailing commas after the last
//!     property are accepted; a comma that does not follow a property is a
//!     syntax error.

use crate::scene::ast::elements::ValueShape;
use crate::scene::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The scene language keywords, looked up after identifier maximal munch.
///
/// Keywords are case-sensitive; `Camera` stays a plain identifier.
pub static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("camera", TokenKind::Camera),
        ("light", TokenKind::Light),
        ("material", TokenKind::Material),
        ("transform", TokenKind::Transform),
        ("sphere", TokenKind::Sphere),
        ("plane", TokenKind::Plane),
        ("triangle", TokenKind::Triangle),
    ])
});

/// Keywords that can start a declaration.
///
/// This doubles as the panic-mode synchronization set: after an error the
/// parser discards tokens until it sees one of these or end of input.
pub const DECLARATION_STARTS: [TokenKind; 7] = [
    TokenKind::Camera,
    TokenKind::Light,
    TokenKind::Material,
    TokenKind::Transform,
    TokenKind::Sphere,
    TokenKind::Plane,
    TokenKind::Triangle,
];

/// Check whether a token kind predicts a declaration
pub fn starts_declaration(kind: TokenKind) -> bool {
    DECLARATION_STARTS.contains(&kind)
}

/// Expected value shapes for well-known property names.
///
/// A property whose name is listed here must carry a value of the given
/// shape; a grammar-valid value of the wrong shape is a value-shape error
/// and the property is recorded with a placeholder. Identifier references
/// satisfy any expected shape since their referent is resolved downstream.
/// Property names not listed accept any value.
pub static PROPERTY_SHAPES: Lazy<HashMap<&'static str, ValueShape>> = Lazy::new(|| {
    HashMap::from([
        ("fov", ValueShape::Number),
        ("radius", ValueShape::Number),
        ("intensity", ValueShape::Number),
        ("shininess", ValueShape::Number),
        ("reflectivity", ValueShape::Number),
        ("ior", ValueShape::Number),
        ("width", ValueShape::Number),
        ("height", ValueShape::Number),
        ("position", ValueShape::Vector3),
        ("direction", ValueShape::Vector3),
        ("look_at", ValueShape::Vector3),
        ("up", ValueShape::Vector3),
        ("center", ValueShape::Vector3),
        ("normal", ValueShape::Vector3),
        ("color", ValueShape::Vector3),
        ("scale", ValueShape::Vector3),
        ("rotate", ValueShape::Vector3),
        ("translate", ValueShape::Vector3),
        ("v0", ValueShape::Vector3),
        ("v1", ValueShape::Vector3),
        ("v2", ValueShape::Vector3),
        ("texture", ValueShape::Str),
    ])
});

/// Look up the expected shape for a property name
pub fn expected_shape(name: &str) -> Option<ValueShape> {
    PROPERTY_SHAPES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_set_is_complete() {
        assert_eq!(KEYWORDS.len(), 7);
        assert_eq!(KEYWORDS.get("camera"), Some(&TokenKind::Camera));
        assert_eq!(KEYWORDS.get("triangle"), Some(&TokenKind::Triangle));
        assert_eq!(KEYWORDS.get("Camera"), None);
        assert_eq!(KEYWORDS.get("cameras"), None);
    }

    #[test]
    fn test_every_keyword_starts_a_declaration() {
        for kind in KEYWORDS.values() {
            assert!(starts_declaration(*kind), "{:?} should start a declaration", kind);
        }
    }

    #[test]
    fn test_non_keywords_do_not_start_declarations() {
        assert!(!starts_declaration(TokenKind::Identifier));
        assert!(!starts_declaration(TokenKind::OpenBrace));
        assert!(!starts_declaration(TokenKind::Eof));
        assert!(!starts_declaration(TokenKind::Error));
    }

    #[test]
    fn test_expected_shapes() {
        assert_eq!(expected_shape("radius"), Some(ValueShape::Number));
        assert_eq!(expected_shape("position"), Some(ValueShape::Vector3));
        assert_eq!(expected_shape("texture"), Some(ValueShape::Str));
        assert_eq!(expected_shape("custom_thing"), None);
    }
}
