//! Modification detection over matched node pairs.

use super::IdentityField;
use crate::model::{DocumentTree, Node, NodeId};
use std::collections::HashMap;

/// Decides whether a matched node pair counts as modified.
///
/// The comparison policy is a first-class unit: sections compare their
/// lifecycle state, articles compare content, and callers can substitute
/// any policy (normalized text, ignore punctuation, ...) without touching
/// the traversal engine. Implementations must be pure; determinism of the
/// changeset is only guaranteed for a pure predicate.
pub trait ModificationPredicate {
    /// `true` iff the node changed between the old and new snapshot.
    fn is_modified(&self, old: &Node, new: &Node) -> bool;
}

impl<F> ModificationPredicate for F
where
    F: Fn(&Node, &Node) -> bool,
{
    fn is_modified(&self, old: &Node, new: &Node) -> bool {
        self(old, new)
    }
}

/// Section policy: modified iff the `etat` field differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EtatChanged;

impl ModificationPredicate for EtatChanged {
    fn is_modified(&self, old: &Node, new: &Node) -> bool {
        old.data.etat != new.data.etat
    }
}

/// Default article policy: modified iff the `texte` field differs.
///
/// Byte equality only. Finer-grained comparison (whitespace-insensitive,
/// word-level) belongs to the caller-supplied predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexteChanged;

impl ModificationPredicate for TexteChanged {
    fn is_modified(&self, old: &Node, new: &Node) -> bool {
        old.data.texte != new.data.texte
    }
}

/// A modified node paired with its previous version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifiedPair {
    /// Node in the new snapshot
    pub node: NodeId,
    /// Matched node in the old snapshot
    pub previous: NodeId,
}

/// Applies a [`ModificationPredicate`] to every node present in both
/// snapshots.
pub struct ChangeDetector<'p> {
    field: IdentityField,
    predicate: &'p dyn ModificationPredicate,
}

impl<'p> ChangeDetector<'p> {
    #[must_use]
    pub fn new(field: IdentityField, predicate: &'p dyn ModificationPredicate) -> Self {
        Self { field, predicate }
    }

    /// Pair each new-snapshot node with the first old-snapshot node of the
    /// same identity and keep the pairs the predicate flags as modified,
    /// in new-snapshot document order.
    ///
    /// Duplicate identities within one snapshot are undefined behavior
    /// upstream; here the first-found old node wins, silently.
    #[must_use]
    pub fn detect(
        &self,
        old_tree: &DocumentTree,
        old_ids: &[NodeId],
        new_tree: &DocumentTree,
        new_ids: &[NodeId],
    ) -> Vec<ModifiedPair> {
        let mut by_identity: HashMap<&str, NodeId> = HashMap::with_capacity(old_ids.len());
        for &old_id in old_ids {
            if let Some(ident) = self.field.of(&old_tree.node(old_id).data) {
                by_identity.entry(ident).or_insert(old_id);
            }
        }

        new_ids
            .iter()
            .copied()
            .filter_map(|new_id| {
                let ident = self.field.of(&new_tree.node(new_id).data)?;
                let previous = *by_identity.get(ident)?;
                self.predicate
                    .is_modified(old_tree.node(previous), new_tree.node(new_id))
                    .then_some(ModifiedPair {
                        node: new_id,
                        previous,
                    })
            })
            .collect()
    }
}
