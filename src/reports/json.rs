//! JSON report output.

use crate::diff::Changeset;
use crate::error::{ChangesetError, ReportErrorKind, Result};

/// Serialize the changeset to pretty-printed JSON.
///
/// The output is the `{added, removed, modified}` mapping; every entry
/// exposes `parents`, `textId` and `rootId` for the rendering layer.
pub fn render_json(changeset: &Changeset) -> Result<String> {
    serde_json::to_string_pretty(changeset).map_err(|e| {
        ChangesetError::report(
            "changeset",
            ReportErrorKind::JsonSerializationError(e.to_string()),
        )
    })
}
