//! Output formats for parsed scenes
//!
//!     Two tooling surfaces over the parse tree:
//!
//!         - Canonical scene text: a pretty printer producing source text
//!           that re-parses to a structurally equal tree (for trees built
//!           only from supported constructs; comments and whitespace of the
//!           original are not preserved). Used for round-trip testing and
//!           normalization.
//!         - JSON: serde serialization of the tree for external tooling.

use crate::scene::ast::elements::{Declaration, Property, SceneDecl};

/// Render a parse tree back to canonical scene text.
///
/// Declarations are separated by a blank line; properties are printed one
/// per line with four-space indentation and no trailing commas. An empty
/// scene renders as the empty string.
pub fn to_scene_string(scene: &SceneDecl) -> String {
    let mut out = String::new();
    for (i, declaration) in scene.declarations.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_declaration(&mut out, declaration);
    }
    out
}

fn write_declaration(out: &mut String, declaration: &Declaration) {
    match declaration {
        Declaration::Camera(decl) => write_block(out, "camera", None, &decl.properties),
        Declaration::Light(decl) => write_block(out, "light", None, &decl.properties),
        Declaration::Object(decl) => {
            write_block(out, decl.shape.keyword(), decl.name.as_deref(), &decl.properties)
        }
        Declaration::Material(decl) => {
            write_block(out, "material", Some(&decl.name), &decl.properties)
        }
        Declaration::Transform(decl) => {
            write_block(out, "transform", decl.name.as_deref(), &decl.properties)
        }
    }
}

fn write_block(out: &mut String, keyword: &str, name: Option<&str>, properties: &[Property]) {
    out.push_str(keyword);
    if let Some(name) = name {
        out.push(' ');
        out.push_str(name);
    }
    if properties.is_empty() {
        out.push_str(" {}\n");
        return;
    }
    out.push_str(" {\n");
    for property in properties {
        out.push_str("    ");
        out.push_str(&property.to_string());
        out.push('\n');
    }
    out.push_str("}\n");
}

/// Serialize a parse tree to pretty-printed JSON
pub fn to_json_string(scene: &SceneDecl) -> serde_json::Result<String> {
    serde_json::to_string_pretty(scene)
}
