//! Changeset engine orchestration.

use super::{
    ChangeDetector, ChangeEntry, Changeset, EtatChanged, IdentityField, IdentityPolicy,
    ModificationPredicate, ModifiedChange, NodeIndexer, SetComparator, TexteChanged,
    TreeAnnotator,
};
use crate::model::{DocumentTree, NodeKind};

/// Compares two snapshots of a document and assembles the [`Changeset`].
///
/// Defaults reproduce the historical behavior: sections match by sniffed
/// identity field (`cid` when present, KALI-style, else `id`) and are
/// modified on `etat` change; articles match by `cid` and are modified on
/// `texte` change. Both the identity policy and the article predicate can
/// be overridden.
///
/// A single invocation is synchronous and pure; independent invocations
/// share nothing and may run in parallel.
pub struct DiffEngine {
    section_identity: IdentityPolicy,
    article_identity: IdentityPolicy,
    section_predicate: Box<dyn ModificationPredicate>,
    article_predicate: Box<dyn ModificationPredicate>,
}

impl DiffEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            section_identity: IdentityPolicy::Auto,
            article_identity: IdentityPolicy::Explicit(IdentityField::Cid),
            section_predicate: Box::new(EtatChanged),
            article_predicate: Box::new(TexteChanged),
        }
    }

    /// Replace the article modification policy.
    #[must_use]
    pub fn with_article_predicate(
        mut self,
        predicate: impl ModificationPredicate + 'static,
    ) -> Self {
        self.article_predicate = Box::new(predicate);
        self
    }

    /// Replace the section identity policy.
    #[must_use]
    pub fn with_section_identity(mut self, policy: IdentityPolicy) -> Self {
        self.section_identity = policy;
        self
    }

    /// Replace the article identity policy.
    #[must_use]
    pub fn with_article_identity(mut self, policy: IdentityPolicy) -> Self {
        self.article_identity = policy;
        self
    }

    /// Compare `old` and `new` and classify every section and article.
    ///
    /// Sections are processed before articles so each changeset group lists
    /// sections first; each kind keeps document order within a group.
    pub fn diff(&self, old: &DocumentTree, new: &DocumentTree) -> Changeset {
        let annotator = TreeAnnotator::new();
        let old_annotated = annotator.annotate(old);
        let new_annotated = annotator.annotate(new);

        let mut changeset = Changeset::new();

        let kinds: [(NodeKind, IdentityPolicy, &dyn ModificationPredicate); 2] = [
            (
                NodeKind::Section,
                self.section_identity,
                self.section_predicate.as_ref(),
            ),
            (
                NodeKind::Article,
                self.article_identity,
                self.article_predicate.as_ref(),
            ),
        ];

        for (kind, policy, predicate) in kinds {
            let indexer = NodeIndexer::new(kind.clone());
            let old_ids = indexer.index(old);
            let new_ids = indexer.index(new);

            // Resolved once per invocation, from the old snapshot, and
            // applied to both sides.
            let field = policy.resolve(old_ids.first().map(|&id| &old.node(id).data));

            let delta =
                SetComparator::new(field).compare(old, &old_ids, new, &new_ids);
            let pairs = ChangeDetector::new(field, predicate)
                .detect(old, &old_ids, new, &new_ids);

            tracing::debug!(
                kind = %kind,
                identity = %field,
                added = delta.added.len(),
                removed = delta.removed.len(),
                modified = pairs.len(),
                "classified nodes"
            );

            changeset.added.extend(
                delta
                    .added
                    .iter()
                    .map(|&id| ChangeEntry::from_node(&new_annotated, id)),
            );
            changeset.removed.extend(
                delta
                    .removed
                    .iter()
                    .map(|&id| ChangeEntry::from_node(&old_annotated, id)),
            );
            changeset.modified.extend(pairs.iter().map(|pair| ModifiedChange {
                node: ChangeEntry::from_node(&new_annotated, pair.node),
                previous: ChangeEntry::from_node(&old_annotated, pair.previous),
            }));
        }

        changeset
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}
