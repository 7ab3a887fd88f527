//! Identity-set reconciliation between two indexed snapshots.

use super::IdentityField;
use crate::model::{DocumentTree, NodeId};
use indexmap::IndexSet;

/// Nodes present on only one side of the comparison.
///
/// Both lists preserve the document order of their originating snapshot.
#[derive(Debug, Default)]
pub struct SetDelta {
    /// In the new snapshot, identity absent from the old one
    pub added: Vec<NodeId>,
    /// In the old snapshot, identity absent from the new one
    pub removed: Vec<NodeId>,
}

/// Computes added/removed sets by exact identity equality.
///
/// No normalization, no fuzzy matching. Nodes without a resolvable
/// identity are never inserted into either identity set and are never
/// classified as added or removed.
#[derive(Debug)]
pub struct SetComparator {
    field: IdentityField,
}

impl SetComparator {
    #[must_use]
    pub fn new(field: IdentityField) -> Self {
        Self { field }
    }

    /// Identities present in the given nodes, insertion-ordered.
    fn identities<'t>(&self, tree: &'t DocumentTree, ids: &[NodeId]) -> IndexSet<&'t str> {
        ids.iter()
            .filter_map(|&id| self.field.of(&tree.node(id).data))
            .collect()
    }

    /// Reconcile the two indexed sequences.
    #[must_use]
    pub fn compare(
        &self,
        old_tree: &DocumentTree,
        old_ids: &[NodeId],
        new_tree: &DocumentTree,
        new_ids: &[NodeId],
    ) -> SetDelta {
        let old_set = self.identities(old_tree, old_ids);
        let new_set = self.identities(new_tree, new_ids);

        let added = new_ids
            .iter()
            .copied()
            .filter(|&id| {
                self.field
                    .of(&new_tree.node(id).data)
                    .is_some_and(|ident| !old_set.contains(ident))
            })
            .collect();
        let removed = old_ids
            .iter()
            .copied()
            .filter(|&id| {
                self.field
                    .of(&old_tree.node(id).data)
                    .is_some_and(|ident| !new_set.contains(ident))
            })
            .collect();

        SetDelta { added, removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeData, NodeKind};

    fn tree_with_sections(ids: &[Option<&str>]) -> (DocumentTree, Vec<NodeId>) {
        let mut tree = DocumentTree::new(NodeKind::Root, NodeData::default());
        let nodes = ids
            .iter()
            .map(|id| {
                tree.push_child(
                    tree.root(),
                    NodeKind::Section,
                    NodeData {
                        id: id.map(String::from),
                        ..NodeData::default()
                    },
                )
            })
            .collect();
        (tree, nodes)
    }

    #[test]
    fn test_disjoint_identities() {
        let (old_tree, old_ids) = tree_with_sections(&[Some("S1"), Some("S2")]);
        let (new_tree, new_ids) = tree_with_sections(&[Some("S3"), Some("S4")]);

        let delta = SetComparator::new(IdentityField::Id)
            .compare(&old_tree, &old_ids, &new_tree, &new_ids);
        assert_eq!(delta.added, new_ids);
        assert_eq!(delta.removed, old_ids);
    }

    #[test]
    fn test_identical_identities_yield_empty_delta() {
        let (old_tree, old_ids) = tree_with_sections(&[Some("S1"), Some("S2")]);
        let (new_tree, new_ids) = tree_with_sections(&[Some("S1"), Some("S2")]);

        let delta = SetComparator::new(IdentityField::Id)
            .compare(&old_tree, &old_ids, &new_tree, &new_ids);
        assert!(delta.added.is_empty());
        assert!(delta.removed.is_empty());
    }

    #[test]
    fn test_identity_less_node_never_classified() {
        let (old_tree, old_ids) = tree_with_sections(&[Some("S1")]);
        let (new_tree, new_ids) = tree_with_sections(&[Some("S1"), None]);

        let delta = SetComparator::new(IdentityField::Id)
            .compare(&old_tree, &old_ids, &new_tree, &new_ids);
        assert!(delta.added.is_empty(), "identity-less node must not be added");
        assert!(delta.removed.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let (old_tree, old_ids) = tree_with_sections(&[]);
        let (new_tree, new_ids) = tree_with_sections(&[Some("S1"), Some("S2"), Some("S3")]);

        let delta = SetComparator::new(IdentityField::Id)
            .compare(&old_tree, &old_ids, &new_tree, &new_ids);
        let ids: Vec<_> = delta
            .added
            .iter()
            .map(|&id| new_tree.node(id).data.id_value().unwrap())
            .collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
    }
}
