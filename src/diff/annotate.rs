//! Ancestor-context annotation.
//!
//! Downstream consumers (breadcrumb display, legal-database hyperlinks)
//! need per-node context that only the tree can provide: the chain of
//! ancestor titles, the enclosing legislative text's id, and the root id.
//! Annotation derives these once per node so emitted change entries never
//! require tree access.

use crate::model::{DocumentTree, Node, NodeId};
use regex::Regex;
use std::sync::LazyLock;

/// Ids of legislative texts, e.g. `LEGITEXT000006072050` or
/// `KALITEXT000005670044`. Section/article ids use other prefixes.
static TEXT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(KALI|LEGI)TEXT\d+$").expect("static regex"));

/// Derived ancestor context for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeContext {
    /// Ancestor titles, root first, immediate parent last. Ancestors
    /// without a title are omitted.
    pub parents: Vec<String>,
    /// Id of the nearest ancestor that is a legislative text, if any.
    pub text_id: Option<String>,
    /// Id of the tree's root, if it has one.
    pub root_id: Option<String>,
}

/// Walks a tree and derives a [`NodeContext`] for every node.
#[derive(Debug, Default)]
pub struct TreeAnnotator;

impl TreeAnnotator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Annotate every node of `tree`, in document order.
    ///
    /// Each node costs one ascent to the root; the tree itself is not
    /// touched.
    #[must_use]
    pub fn annotate<'t>(&self, tree: &'t DocumentTree) -> AnnotatedTree<'t> {
        let root_id = tree
            .node(tree.root())
            .data
            .id_value()
            .map(str::to_string);

        let mut contexts = vec![
            NodeContext {
                parents: Vec::new(),
                text_id: None,
                root_id: None,
            };
            tree.len()
        ];
        for id in tree.depth_first() {
            contexts[id.index()] = NodeContext {
                parents: Self::parent_titles(tree, id),
                text_id: Self::parent_text_id(tree, id),
                root_id: root_id.clone(),
            };
        }
        AnnotatedTree { tree, contexts }
    }

    fn parent_titles(tree: &DocumentTree, id: NodeId) -> Vec<String> {
        let mut titles: Vec<String> = tree
            .ancestors(id)
            .filter_map(|a| tree.node(a).data.title_value())
            .map(str::to_string)
            .collect();
        titles.reverse();
        titles
    }

    fn parent_text_id(tree: &DocumentTree, id: NodeId) -> Option<String> {
        tree.ancestors(id)
            .filter_map(|a| tree.node(a).data.id_value())
            .find(|candidate| TEXT_ID.is_match(candidate))
            .map(str::to_string)
    }
}

/// A tree paired with the derived context of each of its nodes.
///
/// Borrows the tree read-only; contexts are owned by the annotation.
#[derive(Debug)]
pub struct AnnotatedTree<'t> {
    tree: &'t DocumentTree,
    contexts: Vec<NodeContext>,
}

impl<'t> AnnotatedTree<'t> {
    #[must_use]
    pub fn tree(&self) -> &'t DocumentTree {
        self.tree
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &'t Node {
        self.tree.node(id)
    }

    #[must_use]
    pub fn context(&self, id: NodeId) -> &NodeContext {
        &self.contexts[id.index()]
    }
}
