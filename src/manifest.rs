//! `tree.json` manifests.
//!
//! A manifest is a JSON array of records that fixes the order and grouping of
//! a content subtree independently of file names:
//!
//! ```json
//! [
//!   { "text": "overview" },
//!   { "text": "vue", "collapsed": false, "items": [
//!     { "text": "life-cycle" },
//!     { "text": "keep-alive-life-cycle" }
//!   ]}
//! ]
//! ```
//!
//! Page records resolve to `<dir>/<group labels>/<text>.md`.

use crate::error::TreeError;
use crate::types::ManifestEntry;
use serde::de::Error as _;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

/// Default manifest file name.
pub const MANIFEST_FILE_NAME: &str = "tree.json";

pub fn has_manifest(dir: &Path, manifest_name: &str) -> bool {
    dir.join(manifest_name).is_file()
}

/// Read and parse the manifest in `dir`.
pub fn read_manifest(dir: &Path, manifest_name: &str) -> Result<Vec<ManifestEntry>, TreeError> {
    let path = dir.join(manifest_name);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            return Err(TreeError::ManifestNotFound(path));
        }
        Err(e) => return Err(TreeError::io(path, e)),
    };
    parse_manifest(&content).map_err(|source| TreeError::ManifestParse { path, source })
}

/// Parse manifest JSON. Every `text` must be a single path segment, since it
/// becomes part of a link target.
pub fn parse_manifest(content: &str) -> Result<Vec<ManifestEntry>, serde_json::Error> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(content)?;
    check_labels(&entries)?;
    Ok(entries)
}

fn check_labels(entries: &[ManifestEntry]) -> Result<(), serde_json::Error> {
    for entry in entries {
        let text = entry.text.as_str();
        if text == "." || text == ".." || text.contains(['/', '\\']) {
            return Err(serde_json::Error::custom(format!(
                "`text` must be a single path segment, got {text:?}"
            )));
        }
        if let Some(items) = &entry.items {
            check_labels(items)?;
        }
    }
    Ok(())
}
