//! Changeset result structures.

use super::AnnotatedTree;
use crate::model::{NodeData, NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// One emitted node: its own data plus derived context, children
/// truncated.
///
/// Nested structural changes appear as their own independent entries, so
/// subtrees are never serialized. `textId` and `rootId` are always present
/// (possibly null) so the rendering layer can build breadcrumbs and
/// legal-database links without tree access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub kind: NodeKind,
    pub data: NodeData,
    pub parents: Vec<String>,
    #[serde(rename = "textId")]
    pub text_id: Option<String>,
    #[serde(rename = "rootId")]
    pub root_id: Option<String>,
}

impl ChangeEntry {
    /// Detach a node from its annotated tree into a self-contained entry.
    #[must_use]
    pub fn from_node(annotated: &AnnotatedTree<'_>, id: NodeId) -> Self {
        let node = annotated.node(id);
        let context = annotated.context(id);
        Self {
            kind: node.kind.clone(),
            data: node.data.clone(),
            parents: context.parents.clone(),
            text_id: context.text_id.clone(),
            root_id: context.root_id.clone(),
        }
    }

    /// Short human-readable label: article number, title, or identity.
    #[must_use]
    pub fn label(&self) -> &str {
        self.data
            .num
            .as_deref()
            .or(self.data.title_value())
            .or(self.data.cid_value())
            .or(self.data.id_value())
            .unwrap_or("(sans titre)")
    }
}

/// A modified node with its previous version attached for downstream
/// content diffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedChange {
    pub node: ChangeEntry,
    pub previous: ChangeEntry,
}

/// Result of comparing two snapshots of one document.
///
/// Within each group, sections precede articles and each kind keeps its
/// document order. Serializes to the `{added, removed, modified}` mapping
/// consumed by the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Changeset {
    pub added: Vec<ChangeEntry>,
    pub removed: Vec<ChangeEntry>,
    pub modified: Vec<ModifiedChange>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    /// Per-group counts, for logs and the summary report.
    #[must_use]
    pub fn summary(&self) -> ChangesetSummary {
        ChangesetSummary {
            added: self.added.len(),
            removed: self.removed.len(),
            modified: self.modified.len(),
            total: self.total(),
        }
    }
}

/// Summary statistics of a [`Changeset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangesetSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub total: usize,
}
