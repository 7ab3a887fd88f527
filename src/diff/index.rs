//! Kind indexing and identity-field resolution.

use crate::model::{DocumentTree, NodeData, NodeId, NodeKind};
use std::fmt;

/// Which data field identifies a node across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    /// Structural `id`
    Id,
    /// Content id `cid`, stable across re-codifications
    Cid,
}

impl IdentityField {
    /// Read this field from a node's data. Empty strings count as absent,
    /// so a node returning `None` here is excluded from matching by design.
    #[must_use]
    pub fn of<'a>(self, data: &'a NodeData) -> Option<&'a str> {
        match self {
            Self::Id => data.id_value(),
            Self::Cid => data.cid_value(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Cid => "cid",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the identity field is chosen for one node kind.
///
/// `Auto` reproduces the historical sniff: KALI sections carry no `id`,
/// only a `cid`, so the field is inferred from the first indexed node of
/// the OLD snapshot and applied to both sides for the whole invocation.
/// The sniff misclassifies heterogeneous snapshots (first node with a
/// `cid`, later nodes without); callers that know their corpus should use
/// `Explicit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentityPolicy {
    #[default]
    Auto,
    Explicit(IdentityField),
}

impl IdentityPolicy {
    /// Resolve to a concrete field given the first indexed node of the old
    /// snapshot, if any.
    #[must_use]
    pub fn resolve(self, old_first: Option<&NodeData>) -> IdentityField {
        match self {
            Self::Explicit(field) => field,
            Self::Auto => {
                if old_first.is_some_and(|data| data.cid_value().is_some()) {
                    IdentityField::Cid
                } else {
                    IdentityField::Id
                }
            }
        }
    }
}

/// Extracts all nodes of one kind from a tree, in document order.
#[derive(Debug)]
pub struct NodeIndexer {
    target: NodeKind,
}

impl NodeIndexer {
    #[must_use]
    pub fn new(target: NodeKind) -> Self {
        Self { target }
    }

    /// All nodes of the target kind, depth-first, regardless of nesting.
    ///
    /// Nodes missing the identity field are kept: they still render, they
    /// just never match anything during comparison.
    #[must_use]
    pub fn index(&self, tree: &DocumentTree) -> Vec<NodeId> {
        tree.depth_first()
            .filter(|&id| tree.node(id).kind == self.target)
            .collect()
    }
}
