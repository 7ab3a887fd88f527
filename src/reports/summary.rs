//! Human-readable summary report.

use crate::diff::{ChangeEntry, Changeset};
use std::fmt::Write as _;

/// Render a terminal-friendly summary of the changeset.
///
/// One line per change, prefixed `+` / `-` / `~`, with the ancestor chain
/// as breadcrumbs where available.
#[must_use]
pub fn render_summary(changeset: &Changeset) -> String {
    if changeset.is_empty() {
        return "No changes detected.\n".to_string();
    }

    let summary = changeset.summary();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} changes: {} added, {} removed, {} modified",
        summary.total, summary.added, summary.removed, summary.modified
    );

    for entry in &changeset.added {
        let _ = writeln!(out, "  + {}", describe(entry));
    }
    for entry in &changeset.removed {
        let _ = writeln!(out, "  - {}", describe(entry));
    }
    for change in &changeset.modified {
        let _ = writeln!(out, "  ~ {}", describe(&change.node));
        if let (Some(old_etat), Some(new_etat)) = (
            change.previous.data.etat.as_deref(),
            change.node.data.etat.as_deref(),
        ) {
            if old_etat != new_etat {
                let _ = writeln!(out, "      etat: {old_etat} -> {new_etat}");
            }
        }
    }

    out
}

fn describe(entry: &ChangeEntry) -> String {
    let mut line = format!("{} {}", entry.kind, entry.label());
    if !entry.parents.is_empty() {
        let _ = write!(line, " ({})", entry.parents.join(" > "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::parsers::parse_tree_str;

    #[test]
    fn test_empty_changeset_summary() {
        assert_eq!(render_summary(&Changeset::new()), "No changes detected.\n");
    }

    #[test]
    fn test_summary_lines() {
        let old = parse_tree_str(
            r#"{"type":"root","data":{"id":"LEGITEXT000000000001","title":"Code du travail"},
                "children":[
                {"type":"section","data":{"id":"S1","etat":"VIGUEUR","title":"Titre I"}},
                {"type":"section","data":{"id":"S2","etat":"VIGUEUR","title":"Titre II"}}]}"#,
        )
        .expect("old");
        let new = parse_tree_str(
            r#"{"type":"root","data":{"id":"LEGITEXT000000000001","title":"Code du travail"},
                "children":[
                {"type":"section","data":{"id":"S1","etat":"ABROGE","title":"Titre I"}},
                {"type":"section","data":{"id":"S3","etat":"VIGUEUR","title":"Titre III"}}]}"#,
        )
        .expect("new");

        let changeset = DiffEngine::new().diff(&old, &new);
        let summary = render_summary(&changeset);

        assert!(summary.contains("3 changes: 1 added, 1 removed, 1 modified"));
        assert!(summary.contains("+ section Titre III (Code du travail)"));
        assert!(summary.contains("- section Titre II (Code du travail)"));
        assert!(summary.contains("~ section Titre I (Code du travail)"));
        assert!(summary.contains("etat: VIGUEUR -> ABROGE"));
    }
}
