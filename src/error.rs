//! Tree-building errors.
//!
//! Every error is fatal for the tree being built: a sidebar that silently
//! drops a page is worse than a failed site build.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid root {path}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Entry name shorter than the {width}-character ordering prefix: {path}")]
    MalformedEntryName { path: PathBuf, width: usize },
    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),
    #[error("Malformed manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`TreeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRoot,
    IoFailure,
    MalformedEntryName,
    ManifestNotFound,
    ManifestParseError,
}

impl TreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::InvalidRoot { .. } => ErrorKind::InvalidRoot,
            TreeError::Io { .. } => ErrorKind::IoFailure,
            TreeError::MalformedEntryName { .. } => ErrorKind::MalformedEntryName,
            TreeError::ManifestNotFound(_) => ErrorKind::ManifestNotFound,
            TreeError::ManifestParse { .. } => ErrorKind::ManifestParseError,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }

    /// A path that cannot be written as a UTF-8 link target.
    pub(crate) fn non_utf8(path: impl Into<PathBuf>) -> Self {
        TreeError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, "name is not valid UTF-8"),
        )
    }

    pub(crate) fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        TreeError::InvalidRoot {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
