//! Pipeline orchestration: parse, diff, output.
//!
//! Shared stages for CLI command handlers, so the handlers stay thin.

use crate::error::Result;
use crate::model::DocumentTree;
use crate::parsers::parse_tree;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or no --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected and --fail-on-change was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Parse a snapshot file, logging what was read.
pub fn parse_tree_with_context(path: &Path, quiet: bool) -> Result<DocumentTree> {
    let tree = parse_tree(path)?;
    if !quiet {
        tracing::info!(
            path = %path.display(),
            nodes = tree.len(),
            "parsed snapshot"
        );
    }
    Ok(tree)
}

/// Where report output goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Write rendered report content to the target.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| crate::error::ChangesetError::io(path, e))
        }
    }
}
