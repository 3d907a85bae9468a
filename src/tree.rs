//! Sidebar tree building.
//!
//! Two modes produce the same [`NavNode`] shape:
//!
//! - **Directory mode** ([`build_tree_from_directory`]): order and grouping
//!   come from the filesystem. Files become links, subdirectories become
//!   collapsible groups, and the ordering prefix is stripped from every label.
//! - **Manifest mode** ([`build_tree_from_manifest`]): order and grouping come
//!   from a curated `tree.json` in the root directory.
//!
//! [`build_tree`] picks the mode from the presence of the manifest file. In
//! directory mode, any subdirectory holding a manifest switches to manifest
//! mode for its own subtree.
//!
//! Building is all-or-nothing: the first malformed name, unreadable entry or
//! bad manifest aborts the build and no partial tree is returned.

use crate::content_root::{self, ContentRoot, LinkStyle};
use crate::error::TreeError;
use crate::manifest::{self, MANIFEST_FILE_NAME};
use crate::naming::{NameTooShort, OrderingPrefix};
use crate::scan;
use crate::types::{BuildMode, DirectoryEntry, ManifestEntry, NavNode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default directory-name exclusion pattern.
pub const DEFAULT_EXCLUDE: &str = "images";

/// Knobs shared by both build modes.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeOptions {
    pub prefix: OrderingPrefix,
    /// Directory names containing any of these substrings are skipped.
    pub exclude: Vec<String>,
    /// Name of the ancestor directory that targets are relative to.
    pub content_root: String,
    pub manifest_name: String,
    /// Collapse state for generated groups.
    pub collapsed: bool,
    pub include_hidden: bool,
    pub link_style: LinkStyle,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            prefix: OrderingPrefix::default(),
            exclude: vec![DEFAULT_EXCLUDE.to_string()],
            content_root: content_root::DEFAULT_SENTINEL.to_string(),
            manifest_name: MANIFEST_FILE_NAME.to_string(),
            collapsed: true,
            include_hidden: false,
            link_style: LinkStyle::File,
        }
    }
}

impl TreeOptions {
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude
            .iter()
            .any(|pattern| dir_name.contains(pattern.as_str()))
    }
}

/// Mode for `root`: manifest when the manifest file exists there.
pub fn detect_mode(root: &Path, options: &TreeOptions) -> BuildMode {
    if manifest::has_manifest(root, &options.manifest_name) {
        BuildMode::Manifest
    } else {
        BuildMode::Directory
    }
}

/// Build the tree for `root` in whichever mode it opts into.
pub fn build_tree(root: &Path, options: &TreeOptions) -> Result<Vec<NavNode>, TreeError> {
    match detect_mode(root, options) {
        BuildMode::Directory => build_tree_from_directory(root, options),
        BuildMode::Manifest => build_tree_from_manifest(root, options),
    }
}

/// Build a tree from the filesystem under `root`.
///
/// A manifest in `root` itself is ignored here; use [`build_tree`] to honor it.
pub fn build_tree_from_directory(
    root: &Path,
    options: &TreeOptions,
) -> Result<Vec<NavNode>, TreeError> {
    let root = validate_root(root)?;
    let content_root = ContentRoot::locate(&root, &options.content_root)?;
    debug!(root = %root.display(), content_root = %content_root.path().display(), "Building tree from directory");

    let entries = scan::list_directory(&root, options)?;
    nav_from_entries(&entries, &content_root, options)
}

/// Build a tree from the manifest file in `root`.
pub fn build_tree_from_manifest(
    root: &Path,
    options: &TreeOptions,
) -> Result<Vec<NavNode>, TreeError> {
    let root = validate_root(root)?;
    let content_root = ContentRoot::locate(&root, &options.content_root)?;
    debug!(root = %root.display(), "Building tree from manifest");

    let entries = manifest::read_manifest(&root, &options.manifest_name)?;
    let base = content_root.relative(&root)?;
    Ok(nav_from_manifest(&entries, &base, options))
}

/// Convert a directory listing into navigation. Pure: no filesystem access.
pub fn nav_from_entries(
    entries: &[DirectoryEntry],
    content_root: &ContentRoot,
    options: &TreeOptions,
) -> Result<Vec<NavNode>, TreeError> {
    entries
        .iter()
        .map(|entry| nav_from_entry(entry, content_root, options))
        .collect()
}

fn nav_from_entry(
    entry: &DirectoryEntry,
    content_root: &ContentRoot,
    options: &TreeOptions,
) -> Result<NavNode, TreeError> {
    let malformed = |NameTooShort { width }| TreeError::MalformedEntryName {
        path: entry.path().to_path_buf(),
        width,
    };

    match entry {
        DirectoryEntry::File { name, path } => {
            let label = options.prefix.file_label(name).map_err(malformed)?;
            let rel = content_root.relative(path)?;
            Ok(NavNode::leaf(label, options.link_style.render(&rel)))
        }
        DirectoryEntry::Directory { name, children, .. } => {
            let label = options.prefix.directory_label(name).map_err(malformed)?;
            let children = nav_from_entries(children, content_root, options)?;
            Ok(NavNode::branch(label, options.collapsed, children))
        }
        DirectoryEntry::Curated {
            name,
            path,
            manifest,
        } => {
            let label = options.prefix.directory_label(name).map_err(malformed)?;
            let base = content_root.relative(path)?;
            let children = nav_from_manifest(manifest, &base, options);
            Ok(NavNode::branch(label, options.collapsed, children))
        }
    }
}

/// Convert manifest records into navigation.
///
/// `base` is the content-root-relative directory holding the manifest. Page
/// targets are `base/<enclosing group labels>/<text>.md`; every enclosing
/// group contributes one directory segment.
pub fn nav_from_manifest(entries: &[ManifestEntry], base: &str, options: &TreeOptions) -> Vec<NavNode> {
    let mut groups = Vec::new();
    nav_from_manifest_at(entries, base, &mut groups, options)
}

fn nav_from_manifest_at<'a>(
    entries: &'a [ManifestEntry],
    base: &str,
    groups: &mut Vec<&'a str>,
    options: &TreeOptions,
) -> Vec<NavNode> {
    entries
        .iter()
        .map(|entry| match &entry.items {
            Some(items) => {
                groups.push(&entry.text);
                let children = nav_from_manifest_at(items, base, groups, options);
                groups.pop();
                NavNode::branch(
                    entry.text.clone(),
                    entry.collapsed.unwrap_or(options.collapsed),
                    children,
                )
            }
            None => {
                let file = format!("{}.md", entry.text);
                let rel = content_root::join_segments(
                    std::iter::once(base)
                        .chain(groups.iter().copied())
                        .chain(std::iter::once(file.as_str())),
                );
                NavNode::leaf(entry.text.clone(), options.link_style.render(&rel))
            }
        })
        .collect()
}

/// Check that `root` exists and is a directory, returning its absolute path.
///
/// Symlinks in the path are kept so the content-root sentinel is matched
/// against the names the user wrote.
pub(crate) fn validate_root(root: &Path) -> Result<PathBuf, TreeError> {
    let metadata = fs::metadata(root)
        .map_err(|e| TreeError::invalid_root(root, format!("cannot access: {e}")))?;
    if !metadata.is_dir() {
        return Err(TreeError::invalid_root(root, "not a directory"));
    }
    content_root::resolve_dir(root).map_err(|e| TreeError::io(root, e))
}
