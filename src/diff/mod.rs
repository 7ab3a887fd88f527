//! Structural changeset engine for legal-text trees.
//!
//! Compares two snapshots of the same document and classifies every section
//! and article as added, removed or modified. The engine runs sequential
//! depth-first passes and is pure: no IO, no shared state, deterministic
//! output for deterministic inputs and a pure modification predicate.
//!
//! # Architecture
//!
//! The comparison is staged:
//!
//! - [`TreeAnnotator`]: ancestor context (`parents`, `textId`, `rootId`)
//! - [`NodeIndexer`]: document-order extraction of one node kind plus
//!   identity-field resolution ([`IdentityPolicy`])
//! - [`SetComparator`]: identity-set reconciliation into added/removed
//! - [`ChangeDetector`]: per-kind [`ModificationPredicate`] over matched
//!   pairs, linking each modified node to its previous version
//! - [`DiffEngine`]: orchestration and assembly into a [`Changeset`]
//!
//! # Example
//!
//! ```
//! use legidiff::diff::DiffEngine;
//! use legidiff::parsers::parse_tree_str;
//!
//! let old = parse_tree_str(r#"{"type":"root","data":{"id":"LEGITEXT000000000001"},
//!     "children":[{"type":"section","data":{"id":"S1","etat":"VIGUEUR"}}]}"#).unwrap();
//! let new = parse_tree_str(r#"{"type":"root","data":{"id":"LEGITEXT000000000001"},
//!     "children":[{"type":"section","data":{"id":"S1","etat":"ABROGE"}}]}"#).unwrap();
//!
//! let changeset = DiffEngine::new().diff(&old, &new);
//! assert_eq!(changeset.modified.len(), 1);
//! ```

mod annotate;
mod compare;
mod detect;
mod engine;
mod index;
mod result;

pub use annotate::{AnnotatedTree, NodeContext, TreeAnnotator};
pub use compare::{SetComparator, SetDelta};
pub use detect::{ChangeDetector, EtatChanged, ModificationPredicate, ModifiedPair, TexteChanged};
pub use engine::DiffEngine;
pub use index::{IdentityField, IdentityPolicy, NodeIndexer};
pub use result::{ChangeEntry, Changeset, ChangesetSummary, ModifiedChange};
