//! Changeset report generation.
//!
//! Two renderers: machine-readable JSON (the changeset's serialization
//! contract, for the web rendering layer) and a human-readable summary for
//! terminals and CI logs.

mod json;
mod summary;

pub use json::render_json;
pub use summary::render_summary;

use crate::diff::Changeset;
use crate::error::Result;
use clap::ValueEnum;
use std::fmt;

/// Output format for changeset reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Full changeset as pretty-printed JSON
    Json,
    /// Per-change one-liners with counts
    #[default]
    Summary,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Summary => f.write_str("summary"),
        }
    }
}

/// Render a changeset in the requested format.
pub fn render(format: ReportFormat, changeset: &Changeset) -> Result<String> {
    match format {
        ReportFormat::Json => render_json(changeset),
        ReportFormat::Summary => Ok(render_summary(changeset)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatch() {
        let changeset = Changeset::new();
        let json = render(ReportFormat::Json, &changeset).expect("json");
        assert!(json.contains("\"added\""));
        let summary = render(ReportFormat::Summary, &changeset).expect("summary");
        assert!(summary.contains("No changes"));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Json.to_string(), "json");
        assert_eq!(ReportFormat::Summary.to_string(), "summary");
    }
}
