//! Configuration types for CLI commands.

use crate::error::{ChangesetError, Result};
use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Anything that can check its own consistency before a command runs.
pub trait Validatable {
    fn validate(&self) -> Result<()>;
}

/// The two snapshots being compared.
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Old/baseline snapshot
    pub old: PathBuf,
    /// New snapshot
    pub new: PathBuf,
}

/// Where and how the report is written.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Stdout if not set
    pub file: Option<PathBuf>,
}

/// Behavior flags shared by commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorConfig {
    pub quiet: bool,
    /// Exit non-zero when the changeset is non-empty (CI gating)
    pub fail_on_change: bool,
}

/// Full configuration of the `diff` command.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Result<()> {
        for (label, path) in [("old", &self.paths.old), ("new", &self.paths.new)] {
            if !path.is_file() {
                return Err(ChangesetError::config(format!(
                    "{label} snapshot not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
