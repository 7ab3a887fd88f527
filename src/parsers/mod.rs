//! Document tree ingestion.
//!
//! Snapshots arrive as unist-style JSON trees: every node is an object with
//! a `type` string, a `data` object and a `children` array. This module
//! deserializes that shape into the arena [`DocumentTree`](crate::model::DocumentTree)
//! used by the diff engine. It does not fetch anything: retrieval of
//! snapshots is the caller's concern.
//!
//! ## Usage
//!
//! ```no_run
//! use legidiff::parsers::parse_tree;
//! use std::path::Path;
//!
//! let tree = parse_tree(Path::new("snapshot.json")).unwrap();
//! println!("{} nodes", tree.len());
//! ```

mod json;

pub use json::parse_tree_str;

use crate::error::{ChangesetError, ParseErrorKind, Result};
use crate::model::DocumentTree;
use std::path::Path;

/// Maximum tree file size (256 MB). A full LEGI code snapshot stays well
/// under this; anything larger is rejected to prevent OOM.
const MAX_TREE_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Read and parse a document tree from a JSON file.
pub fn parse_tree(path: &Path) -> Result<DocumentTree> {
    let metadata = std::fs::metadata(path).map_err(|e| ChangesetError::io(path, e))?;
    if metadata.len() > MAX_TREE_FILE_SIZE {
        return Err(ChangesetError::parse(
            format!("at {}", path.display()),
            ParseErrorKind::FileTooLarge {
                size: metadata.len() / (1024 * 1024),
                limit: MAX_TREE_FILE_SIZE / (1024 * 1024),
            },
        ));
    }
    let content = std::fs::read_to_string(path).map_err(|e| ChangesetError::io(path, e))?;
    parse_tree_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_parse_tree_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"type":"root","data":{{"id":"LEGITEXT000006072050"}},"children":[]}}"#
        )
        .expect("write fixture");

        let tree = parse_tree(file.path()).expect("parse");
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(tree.root()).data.id_value(),
            Some("LEGITEXT000006072050")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_tree(Path::new("/nonexistent/tree.json")).expect_err("must fail");
        assert!(matches!(err, ChangesetError::Io { .. }));
    }
}
