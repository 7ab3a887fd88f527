//! **Structural changeset computation for LEGI/KALI legal-text trees.**
//!
//! `legidiff` compares two successive snapshots of a hierarchical legal
//! document (a statutory code, a collective-bargaining convention, a
//! public-service information sheet) and produces a changeset describing
//! which sections and articles were added, removed or modified. Modified
//! nodes are linked to their previous version so a downstream renderer can
//! diff content word by word.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the arena [`DocumentTree`] — flat node storage with
//!   index-based parent links, immutable once built.
//! - **[`parsers`]**: ingestion of unist-style JSON snapshots into the
//!   arena tree.
//! - **[`diff`]**: the [`DiffEngine`] and its stages (annotation,
//!   indexing, set reconciliation, modification detection).
//! - **[`reports`]**: JSON and summary renderers for the [`Changeset`].
//! - **[`pipeline`]** / **[`cli`]**: parse → diff → report orchestration
//!   for the command-line tool.
//!
//! ## Getting Started: Diffing Two Snapshots
//!
//! ```no_run
//! use std::path::Path;
//! use legidiff::{parse_tree, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = parse_tree(Path::new("snapshots/2026-01.json"))?;
//!     let new = parse_tree(Path::new("snapshots/2026-02.json"))?;
//!
//!     let changeset = DiffEngine::new().diff(&old, &new);
//!     println!("Added: {}", changeset.added.len());
//!     println!("Removed: {}", changeset.removed.len());
//!     for change in &changeset.modified {
//!         println!("~ {} (was {:?})", change.node.label(), change.previous.data.etat);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Content Comparison
//!
//! Article modification policy is pluggable: supply any
//! [`ModificationPredicate`] (including a closure) to control what counts
//! as a content change.
//!
//! ```
//! use legidiff::{DiffEngine, Node};
//!
//! let engine = DiffEngine::new().with_article_predicate(|old: &Node, new: &Node| {
//!     // whitespace-insensitive comparison
//!     let squash = |t: Option<&str>| t.map(|s| s.split_whitespace().collect::<String>());
//!     squash(old.data.texte.as_deref()) != squash(new.data.texte.as_deref())
//! });
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig, Validatable};
pub use diff::{
    AnnotatedTree, ChangeDetector, ChangeEntry, Changeset, ChangesetSummary, DiffEngine,
    EtatChanged, IdentityField, IdentityPolicy, ModificationPredicate, ModifiedChange,
    NodeContext, NodeIndexer, SetComparator, TexteChanged, TreeAnnotator,
};
pub use error::{ChangesetError, Result};
pub use model::{DocumentTree, Node, NodeData, NodeId, NodeKind};
pub use parsers::{parse_tree, parse_tree_str};
pub use reports::{render, ReportFormat};
