//! unist JSON deserialization into the arena tree.

use crate::error::Result;
use crate::model::{DocumentTree, NodeData, NodeId, NodeKind};
use serde::Deserialize;

/// Raw node shape as produced by the upstream legal-text parser.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(default)]
    data: NodeData,
    #[serde(default)]
    children: Vec<RawNode>,
}

/// Parse a document tree from JSON content.
///
/// Unknown `type` values and missing `data` fields are accepted; they
/// degrade to [`NodeKind::Other`] and empty [`NodeData`] respectively.
pub fn parse_tree_str(content: &str) -> Result<DocumentTree> {
    let raw: RawNode = serde_json::from_str(content)?;
    let mut tree = DocumentTree::new(raw.kind, raw.data);
    let root = tree.root();
    for child in raw.children {
        attach(&mut tree, root, child);
    }
    Ok(tree)
}

fn attach(tree: &mut DocumentTree, parent: NodeId, raw: RawNode) {
    let id = tree.push_child(parent, raw.kind, raw.data);
    for child in raw.children {
        attach(tree, id, child);
    }
}
