//! Tree serialization.
//!
//! Scalars are written as literal values, references as tagged handles, and
//! absent optional fields as `null` so renderers can tell "no components"
//! from "zero components".

use serde_json::{json, Map, Value};

use crate::entry::{ComponentEntry, PropsSlot};
use crate::reference::ResourceRef;
use crate::section::SectionNode;
use crate::tree::DocumentationTree;

/// Serialize a compiled tree into its emittable JSON form.
pub fn serialize(tree: &DocumentationTree) -> Value {
    json!({
        "config": tree.config,
        "components": tree.components.as_deref().map(components),
        "sections": tree.sections.as_deref().map(sections),
    })
}

/// Serialize a compiled tree into pretty-printed JSON text.
pub fn to_json_string(tree: &DocumentationTree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serialize(tree))
}

fn components(entries: &[ComponentEntry]) -> Value {
    Value::Array(entries.iter().map(component).collect())
}

fn sections(nodes: &[SectionNode]) -> Value {
    Value::Array(nodes.iter().map(section).collect())
}

fn handle(reference: Option<&ResourceRef>) -> Value {
    reference.map_or(Value::Null, ResourceRef::to_handle)
}

fn component(entry: &ComponentEntry) -> Value {
    let props = match &entry.props {
        PropsSlot::Extract(reference) => reference.to_handle(),
        PropsSlot::Empty => Value::Object(Map::new()),
    };

    json!({
        "filepath": entry.filepath.to_string_lossy(),
        "nameFallback": entry.name_fallback,
        "relativePath": entry.relative_path.to_string_lossy(),
        "pathLine": entry.path_line,
        "imagePath": entry.image_path,
        "hasSlice": entry.has_slice,
        "designMarkdown": handle(entry.design.as_ref()),
        "examples": handle(entry.examples.as_ref()),
        "module": handle(entry.module.as_ref()),
        "props": props,
    })
}

fn section(node: &SectionNode) -> Value {
    json!({
        "name": node.name,
        "content": handle(node.content.as_ref()),
        "components": node.components.as_deref().map(components),
        "sections": node.sections.as_deref().map(sections),
    })
}
