//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two snapshots of a
//! legal-text tree.

use crate::config::{DiffConfig, Validatable as _};
use crate::diff::{Changeset, DiffEngine};
use crate::pipeline::{exit_codes, parse_tree_with_context, write_output, OutputTarget};
use crate::reports::render;
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: &DiffConfig) -> Result<i32> {
    config.validate()?;
    let quiet = config.behavior.quiet;

    let old = parse_tree_with_context(&config.paths.old, quiet)?;
    let new = parse_tree_with_context(&config.paths.new, quiet)?;

    let changeset = DiffEngine::new().diff(&old, &new);
    if !quiet {
        let summary = changeset.summary();
        tracing::info!(
            added = summary.added,
            removed = summary.removed,
            modified = summary.modified,
            "comparison complete"
        );
    }

    let rendered = render(config.output.format, &changeset)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&target, &rendered)?;

    Ok(determine_exit_code(config, &changeset))
}

/// Determine the appropriate exit code based on the changeset and config.
fn determine_exit_code(config: &DiffConfig, changeset: &Changeset) -> i32 {
    if config.behavior.fail_on_change && changeset.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BehaviorConfig, DiffPaths, OutputConfig};
    use crate::reports::ReportFormat;
    use std::io::Write as _;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{content}").expect("write fixture");
        file
    }

    #[test]
    fn test_run_diff_end_to_end() {
        let old = write_fixture(
            r#"{"type":"root","data":{"id":"LEGITEXT000000000001"},"children":[
                {"type":"section","data":{"id":"S1","etat":"VIGUEUR"}}]}"#,
        );
        let new = write_fixture(
            r#"{"type":"root","data":{"id":"LEGITEXT000000000001"},"children":[
                {"type":"section","data":{"id":"S1","etat":"ABROGE"}}]}"#,
        );
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("changes.json");

        let config = DiffConfig {
            paths: DiffPaths {
                old: old.path().to_path_buf(),
                new: new.path().to_path_buf(),
            },
            output: OutputConfig {
                format: ReportFormat::Json,
                file: Some(out.clone()),
            },
            behavior: BehaviorConfig {
                quiet: true,
                fail_on_change: true,
            },
        };

        let code = run_diff(&config).expect("run");
        assert_eq!(code, exit_codes::CHANGES_DETECTED);

        let written = std::fs::read_to_string(out).expect("read output");
        let changeset: Changeset = serde_json::from_str(&written).expect("valid changeset");
        assert_eq!(changeset.modified.len(), 1);
    }

    #[test]
    fn test_identical_snapshots_exit_success() {
        let content = r#"{"type":"root","data":{"id":"LEGITEXT000000000001"},"children":[
            {"type":"section","data":{"id":"S1","etat":"VIGUEUR"}}]}"#;
        let old = write_fixture(content);
        let new = write_fixture(content);
        let dir = tempfile::tempdir().expect("temp dir");

        let config = DiffConfig {
            paths: DiffPaths {
                old: old.path().to_path_buf(),
                new: new.path().to_path_buf(),
            },
            output: OutputConfig {
                format: ReportFormat::Summary,
                file: Some(dir.path().join("out.txt")),
            },
            behavior: BehaviorConfig {
                quiet: true,
                fail_on_change: true,
            },
        };

        let code = run_diff(&config).expect("run");
        assert_eq!(code, exit_codes::SUCCESS);
    }
}
