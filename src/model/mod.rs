//! Document tree model for legal-text snapshots.
//!
//! A snapshot of a LEGI code or KALI convention is a rooted, ordered tree of
//! sections and articles. Snapshots are immutable once built: the parser
//! constructs a tree, the diff engine reads two of them, neither is mutated.
//!
//! Nodes live in a flat arena ([`DocumentTree`]) and refer to their parent
//! and children by [`NodeId`] index, so ancestor traversal is index-chasing
//! with no ownership cycles.

mod tree;

pub use tree::{DepthFirst, DocumentTree, Node, NodeData, NodeId, NodeKind};
