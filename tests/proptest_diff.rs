//! Property-based tests for the changeset engine.
//!
//! Ensures the engine's set-theoretic invariants hold across randomly
//! generated trees and that the parser never panics on arbitrary input.

use proptest::prelude::*;
use legidiff::{parse_tree_str, DiffEngine, DocumentTree, NodeData, NodeKind};

/// Shape of one generated section: etat index plus article texts.
type SectionSpec = (usize, Vec<String>);

fn etat_for(index: usize) -> &'static str {
    ["VIGUEUR", "MODIFIE", "ABROGE"][index % 3]
}

/// Build a tree from generated section specs. Identities are unique by
/// construction (the engine treats duplicates as undefined behavior).
fn build(prefix: &str, specs: &[SectionSpec]) -> DocumentTree {
    let mut tree = DocumentTree::new(
        NodeKind::Root,
        NodeData {
            id: Some("LEGITEXT000000000001".to_string()),
            ..NodeData::default()
        },
    );
    for (s, (etat, articles)) in specs.iter().enumerate() {
        let section = tree.push_child(
            tree.root(),
            NodeKind::Section,
            NodeData {
                id: Some(format!("{prefix}SCTA{s:06}")),
                title: Some(format!("Titre {s}")),
                etat: Some(etat_for(*etat).to_string()),
                ..NodeData::default()
            },
        );
        for (a, texte) in articles.iter().enumerate() {
            tree.push_child(
                section,
                NodeKind::Article,
                NodeData {
                    cid: Some(format!("{prefix}ARTI{s:06}{a:06}")),
                    num: Some(format!("{s}-{a}")),
                    texte: Some(texte.clone()),
                    ..NodeData::default()
                },
            );
        }
    }
    tree
}

fn section_specs() -> impl Strategy<Value = Vec<SectionSpec>> {
    prop::collection::vec(
        (0usize..3, prop::collection::vec("\\PC{0,40}", 0..4)),
        0..6,
    )
}

proptest! {
    #[test]
    fn self_diff_is_always_empty(specs in section_specs()) {
        let tree = build("LEGI", &specs);
        let changeset = DiffEngine::new().diff(&tree, &tree);
        prop_assert!(changeset.is_empty(), "self-diff produced {} entries", changeset.total());
    }

    #[test]
    fn disjoint_trees_add_and_remove_everything(
        old_specs in section_specs(),
        new_specs in section_specs(),
    ) {
        // Distinct prefixes guarantee disjoint identity sets.
        let old = build("AAAA", &old_specs);
        let new = build("BBBB", &new_specs);
        let changeset = DiffEngine::new().diff(&old, &new);

        let old_nodes = old.len() - 1; // minus root
        let new_nodes = new.len() - 1;
        prop_assert_eq!(changeset.added.len(), new_nodes);
        prop_assert_eq!(changeset.removed.len(), old_nodes);
        prop_assert!(changeset.modified.is_empty());
    }

    #[test]
    fn diff_groups_partition_matched_nodes(
        old_specs in section_specs(),
        new_specs in section_specs(),
    ) {
        // Same prefix: identities overlap where indices overlap. No node
        // may appear in more than one group.
        let old = build("LEGI", &old_specs);
        let new = build("LEGI", &new_specs);
        let changeset = DiffEngine::new().diff(&old, &new);

        let mut seen = std::collections::HashSet::new();
        for entry in changeset.added.iter().chain(changeset.removed.iter()) {
            let ident = entry.data.cid_value().or(entry.data.id_value()).map(str::to_string);
            if let Some(ident) = ident {
                prop_assert!(seen.insert(ident), "node classified twice");
            }
        }
        for change in &changeset.modified {
            let ident = change.node.data.cid_value()
                .or(change.node.data.id_value())
                .map(str::to_string);
            if let Some(ident) = ident {
                prop_assert!(seen.insert(ident), "modified node also added/removed");
            }
        }
    }

    #[test]
    fn parser_never_panics(content in "\\PC{0,400}") {
        let _ = parse_tree_str(&content);
    }
}
