//! Property tests for the lexer and parser
//!
//!     The lexer properties run over arbitrary input. The parser properties
//!     run over generated well-formed scenes; the generators steer clear of
//!     the keyword set and of well-known property names whose shape would
//!     not match the generated value.

use proptest::prelude::*;
use scene::scene::formats::to_scene_string;
use scene::scene::lexing::tokenize;
use scene::scene::parsing::parse_scene;
use scene::scene::token::TokenKind;

proptest! {
    #[test]
    fn test_tokenize_is_deterministic(source in any::<String>()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn test_last_token_is_always_eof(source in any::<String>()) {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_spans_are_ordered_and_in_bounds(source in any::<String>()) {
        let tokens = tokenize(&source);
        let mut previous_end = 0;
        for token in &tokens {
            prop_assert!(token.location.span.start <= token.location.span.end);
            prop_assert!(token.location.span.end <= source.len());
            prop_assert!(token.location.span.start >= previous_end);
            previous_end = token.location.span.end;
        }
    }
}

/// Identifiers that can never collide with a keyword
fn ident() -> impl Strategy<Value = String> {
    "id[a-z0-9_]{0,8}"
}

fn number() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn value_text() -> impl Strategy<Value = String> {
    prop_oneof![
        number().prop_map(|n| n.to_string()),
        (number(), number(), number()).prop_map(|(x, y, z)| format!("({}, {}, {})", x, y, z)),
        "[a-z ]{0,12}".prop_map(|s| format!("\"{}\"", s)),
        ident(),
    ]
}

fn property_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // names off the shape table accept any value
        ("p_[a-z0-9]{0,6}", value_text()).prop_map(|(name, value)| format!("{} = {}", name, value)),
        number().prop_map(|n| format!("radius = {}", n)),
        (number(), number(), number())
            .prop_map(|(x, y, z)| format!("position = ({}, {}, {})", x, y, z)),
    ]
}

fn declaration_text() -> impl Strategy<Value = String> {
    let header = prop_oneof![
        Just("camera".to_string()),
        Just("light".to_string()),
        "(sphere|plane|triangle|transform)",
        ("(sphere|plane|triangle|transform)", ident()).prop_map(|(k, n)| format!("{} {}", k, n)),
        ident().prop_map(|n| format!("material {}", n)),
    ];
    (header, prop::collection::vec(property_text(), 0..4)).prop_map(|(header, properties)| {
        if properties.is_empty() {
            format!("{} {{ }}", header)
        } else {
            format!("{} {{ {} }}", header, properties.join(", "))
        }
    })
}

proptest! {
    #[test]
    fn test_generated_scenes_parse_clean(
        declarations in prop::collection::vec(declaration_text(), 0..6),
    ) {
        let source = declarations.join("\n");
        let outcome = parse_scene(&source);
        prop_assert!(outcome.errors.is_empty(), "errors: {:?}", outcome.errors);
        prop_assert_eq!(outcome.scene.len(), declarations.len());
    }

    #[test]
    fn test_print_reparse_is_a_fixpoint(
        declarations in prop::collection::vec(declaration_text(), 0..6),
    ) {
        let source = declarations.join("\n");
        let printed = to_scene_string(&parse_scene(&source).scene);

        let reparsed = parse_scene(&printed);
        prop_assert!(reparsed.errors.is_empty(), "errors: {:?}", reparsed.errors);
        prop_assert_eq!(to_scene_string(&reparsed.scene), printed);
    }
}
