//! Translation resource representation and flattening.

use std::collections::{
    BTreeMap,
    HashMap,
};

use serde::Deserialize;
use serde_json::Value;

/// A node of a translation resource: either a nested mapping or an opaque
/// leaf.
///
/// Deserialization is shape-driven: JSON objects become [`Map`] nodes and
/// everything else — strings, numbers, booleans, null, and arrays — becomes
/// a [`Leaf`]. Arrays are deliberately not descended into; they sit at
/// their joined path as a single value.
///
/// [`Map`]: ResourceNode::Map
/// [`Leaf`]: ResourceNode::Leaf
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResourceNode {
    Map(BTreeMap<String, ResourceNode>),
    Leaf(Value),
}

/// Flatten a translation resource into a dot-path lookup table.
///
/// # Examples
/// ```
/// use page_localizer::resource::{
///     ResourceNode,
///     flatten,
/// };
///
/// let tree: ResourceNode =
///     serde_json::from_str(r#"{"nav": {"home": {"title": "Home"}}}"#).unwrap();
///
/// let flat = flatten(&tree);
/// assert_eq!(flat.get("nav.home.title"), Some(&"Home".to_string()));
/// ```
#[must_use]
pub fn flatten(tree: &ResourceNode) -> HashMap<String, String> {
    let mut flat = HashMap::new();
    flatten_node(tree, None, &mut flat);
    flat
}

fn flatten_node(node: &ResourceNode, prefix: Option<&str>, flat: &mut HashMap<String, String>) {
    match node {
        ResourceNode::Map(map) => {
            for (key, value) in map {
                let path = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
                flatten_node(value, Some(&path), flat);
            }
        }
        ResourceNode::Leaf(value) => {
            // A bare leaf at the root has no path and contributes nothing.
            if let Some(path) = prefix {
                flat.insert(path.to_string(), leaf_text(value));
            }
        }
    }
}

/// String leaves are stored verbatim; other leaves as their JSON text.
fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
