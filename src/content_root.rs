//! Content root resolution and link rendering.
//!
//! Link targets are relative to the site's source directory, the nearest
//! ancestor literally named by the configured sentinel (`src` by default):
//!
//! ```text
//! docs/src/page/typescript/01-intro.md
//!      ^^^ content root
//! target = "page/typescript/01-intro.md"
//! ```
//!
//! Targets always use `/` separators, whatever the host OS.

use crate::error::TreeError;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Default sentinel directory name for the content root.
pub const DEFAULT_SENTINEL: &str = "src";

/// The resolved content root for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    path: PathBuf,
}

impl ContentRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Find the nearest ancestor of `start` (itself included) named `sentinel`.
    pub fn locate(start: &Path, sentinel: &str) -> Result<Self, TreeError> {
        start
            .ancestors()
            .find(|dir| dir.file_name().is_some_and(|name| name == sentinel))
            .map(Self::new)
            .ok_or_else(|| {
                TreeError::invalid_root(
                    start,
                    format!("no ancestor directory named `{sentinel}` to use as content root"),
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `path` relative to the content root, `/`-joined. Empty for the root itself.
    pub fn relative(&self, path: &Path) -> Result<String, TreeError> {
        let rel = path.strip_prefix(&self.path).map_err(|_| {
            TreeError::invalid_root(
                path,
                format!("not inside content root {}", self.path.display()),
            )
        })?;
        to_slash(rel).ok_or_else(|| TreeError::non_utf8(path))
    }
}

/// Join path components with `/`. `None` if any component is not UTF-8.
pub fn to_slash(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Absolute form of `path` with `.` and `..` resolved lexically.
///
/// Symlinks are left in place, so a content root reached through a link
/// keeps the name the user sees (`docs/src -> /data/site` still ends in
/// `src`).
pub fn resolve_dir(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Join non-empty `/` segments.
pub fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// How leaf targets are written into the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Content-root-relative file path: `page/ts/01-intro.md`.
    #[default]
    File,
    /// Site route: `/page/ts/01-intro`.
    Route,
}

impl LinkStyle {
    /// Render a content-root-relative file path as a link target.
    pub fn render(self, rel_file: &str) -> String {
        match self {
            LinkStyle::File => rel_file.to_string(),
            LinkStyle::Route => {
                format!("/{}", rel_file.strip_suffix(".md").unwrap_or(rel_file))
            }
        }
    }

    /// Candidate file paths a rendered target may point at, relative to the
    /// content root.
    pub fn candidates(self, target: &str) -> Vec<String> {
        match self {
            LinkStyle::File => vec![target.to_string()],
            LinkStyle::Route => {
                let rel = target.trim_start_matches('/');
                vec![format!("{rel}.md"), rel.to_string()]
            }
        }
    }
}
