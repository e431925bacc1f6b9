//! Print/reparse round-trip tests
//!
//!     The canonical printer drops comments and original whitespace, so the
//!     round-trip property is: printing a parsed tree and reparsing the
//!     output yields a tree that prints identically, and canonical text is a
//!     fixpoint of parse-then-print.

use scene::scene::formats::{to_json_string, to_scene_string};
use scene::scene::testing::parse_clean;

const KITCHEN_SINK: &str = r#"
// full-feature scene
camera {
    fov = 60,
    position = (0, 1.5, -5),
    look_at = (0, 0, 0),
    up = (0, 1, 0)
}

light {
    position = (10, 10, -10)
    intensity = 0.75
    color = (1, 1, 0.9)
}

material chrome {
    color = (0.9, 0.9, 0.95),
    reflectivity = 0.85,
    shininess = 200,
    texture = "brushed.png",
}

sphere ball {
    center = (0, 1, 0) /* unit sphere */
    radius = 1
    surface = chrome
}

plane floor {
    normal = (0, 1, 0)
    offset = -2.5e-1
}

triangle {
    v0 = (-1, 0, 0)
    v1 = (1, 0, 0)
    v2 = (0, 2, 0)
}

transform spin {
    rotate = (0, 45, 0)
    translate = (0, 0, 3)
}
"#;

#[test]
fn test_kitchen_sink_round_trips() {
    let scene = parse_clean(KITCHEN_SINK);
    assert_eq!(scene.len(), 7);

    let printed = to_scene_string(&scene);
    let reparsed = parse_clean(&printed);

    assert_eq!(reparsed.len(), scene.len());
    assert_eq!(to_scene_string(&reparsed), printed);
}

#[test]
fn test_canonical_text_is_a_fixpoint() {
    let printed = to_scene_string(&parse_clean(KITCHEN_SINK));
    assert_eq!(to_scene_string(&parse_clean(&printed)), printed);
}

#[test]
fn test_round_trip_preserves_values() {
    let scene = parse_clean(KITCHEN_SINK);
    let reparsed = parse_clean(&to_scene_string(&scene));

    for (before, after) in scene.declarations.iter().zip(&reparsed.declarations) {
        assert_eq!(before.node_type(), after.node_type());
        assert_eq!(before.properties().len(), after.properties().len());
        for (p, q) in before.properties().iter().zip(after.properties()) {
            assert_eq!(p.name, q.name);
            assert_eq!(p.value, q.value);
        }
    }
}

#[test]
fn test_json_covers_every_declaration() {
    let json = to_json_string(&parse_clean(KITCHEN_SINK)).expect("serializable");

    for variant in ["Camera", "Light", "Material", "Object", "Transform"] {
        assert!(json.contains(variant), "missing {} in JSON output", variant);
    }
    assert!(json.contains("\"chrome\""));
    assert!(json.contains("\"brushed.png\""));
}
