//! Arena-backed document tree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Index of a node inside its [`DocumentTree`] arena.
///
/// Only valid for the tree that produced it; trees are append-only so an id
/// never dangles within its own tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node kind as found in the source tree's `type` field.
///
/// LEGI/KALI trees interpose wrapper nodes (e.g. `texte` containers) between
/// the root and the sections; those are preserved as [`NodeKind::Other`] so
/// ancestor traversal still sees their ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Section,
    Article,
    Other(String),
}

impl NodeKind {
    /// Map a source `type` string to a kind.
    #[must_use]
    pub fn from_type(s: &str) -> Self {
        match s {
            "root" => Self::Root,
            "section" => Self::Section,
            "article" => Self::Article,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Section => "section",
            Self::Article => "article",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_type(&s))
    }
}

/// Kind-specific node payload.
///
/// All fields are optional: a malformed or partial node participates in
/// traversal and display but degrades to "no identity" / "no title" where a
/// field is missing. Unrecognized fields are preserved in `extra` so report
/// output stays faithful to the source snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Structural identifier (e.g. `LEGIARTI000006900846`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Content identifier, stable across re-codifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    /// Lifecycle state (`VIGUEUR`, `ABROGE`, `MODIFIE`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etat: Option<String>,
    /// Textual content of an article
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texte: Option<String>,
    /// Section or text title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Article number (e.g. `L. 1234-5`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<String>,
    /// Source fields not interpreted by the diff
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeData {
    /// The `id` field, with empty strings treated as absent.
    #[must_use]
    pub fn id_value(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }

    /// The `cid` field, with empty strings treated as absent.
    #[must_use]
    pub fn cid_value(&self) -> Option<&str> {
        non_empty(self.cid.as_deref())
    }

    /// The title, with empty strings treated as absent.
    #[must_use]
    pub fn title_value(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.is_empty())
}

/// A single node of a document tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A parsed snapshot: flat arena of nodes, index 0 is the root.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    nodes: Vec<Node>,
}

impl DocumentTree {
    /// Create a tree consisting of a single root node.
    #[must_use]
    pub fn new(kind: NodeKind, data: NodeData) -> Self {
        Self {
            nodes: vec![Node {
                kind,
                data,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Append a child under `parent`, returning the new node's id.
    pub fn push_child(&mut self, parent: NodeId, kind: NodeKind, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// The root node's id.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// Number of nodes in the tree (root included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ancestors of `id`, nearest first, root last. Does not yield `id`.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&cur| self.parent(cur))
    }

    /// Depth-first preorder traversal of the whole tree (document order).
    #[must_use]
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            stack: vec![self.root()],
        }
    }
}

/// Preorder iterator over a [`DocumentTree`].
pub struct DepthFirst<'t> {
    tree: &'t DocumentTree,
    stack: Vec<NodeId>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack.extend(node.children().iter().rev());
        Some(id)
    }
}
