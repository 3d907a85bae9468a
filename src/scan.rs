//! Filesystem listing phase.
//!
//! Walks a content directory and produces a [`DirectoryEntry`] tree. This is
//! the only stage that touches the filesystem in directory mode; turning the
//! listing into navigation is a pure function in [`crate::tree`].
//!
//! ```text
//! src/page/typescript/            # root passed to the builder
//! ├── 01-intro.md                 # File
//! ├── 02-advanced/                # Directory (recursed)
//! │   ├── 01-deep.md
//! │   └── images/                 # excluded, never listed
//! ├── 03-recipes/                 # Curated (has tree.json)
//! │   ├── tree.json
//! │   └── ...
//! ├── images/                     # excluded
//! └── .DS_Store                   # hidden, skipped
//! ```
//!
//! Entries are listed in file-name order. The naming convention makes that
//! the display order, and it keeps output identical across platforms whose
//! `readdir` order differs.

use crate::error::TreeError;
use crate::manifest;
use crate::tree::TreeOptions;
use crate::types::DirectoryEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// List `dir` recursively, honoring exclusions and nested manifests.
///
/// Symlinks are followed. A link keeps its own path, so its target is
/// written as if the linked content lived in the tree. A directory link that
/// leads back into one of its own ancestors is an error.
pub fn list_directory(dir: &Path, options: &TreeOptions) -> Result<Vec<DirectoryEntry>, TreeError> {
    let canonical = fs::canonicalize(dir).map_err(|e| TreeError::io(dir, e))?;
    let mut ancestors = vec![canonical];
    list_directory_within(dir, options, &mut ancestors)
}

fn list_directory_within(
    dir: &Path,
    options: &TreeOptions,
    ancestors: &mut Vec<PathBuf>,
) -> Result<Vec<DirectoryEntry>, TreeError> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let path = entry.path().to_path_buf();

        if !options.include_hidden && entry.file_name().as_encoded_bytes().starts_with(b".") {
            debug!(path = %path.display(), "Skipping hidden entry");
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            return Err(TreeError::non_utf8(path));
        };

        let file_type = if entry.path_is_symlink() {
            debug!(path = %path.display(), "Following symlink");
            fs::metadata(&path)
                .map_err(|e| TreeError::io(&path, e))?
                .file_type()
        } else {
            entry.file_type()
        };

        if file_type.is_dir() {
            if options.is_excluded(&name) {
                debug!(path = %path.display(), "Skipping excluded directory");
                continue;
            }
            entries.push(list_subdirectory(name, path, options, ancestors)?);
        } else if file_type.is_file() {
            if name == options.manifest_name {
                continue;
            }
            debug!(path = %path.display(), "Found page");
            entries.push(DirectoryEntry::File { name, path });
        } else {
            warn!(path = %path.display(), "Skipping special file");
        }
    }

    Ok(entries)
}

fn list_subdirectory(
    name: String,
    path: PathBuf,
    options: &TreeOptions,
    ancestors: &mut Vec<PathBuf>,
) -> Result<DirectoryEntry, TreeError> {
    let canonical = fs::canonicalize(&path).map_err(|e| TreeError::io(&path, e))?;
    if ancestors.contains(&canonical) {
        let cycle = std::io::Error::other(format!(
            "symlink loops back to {}",
            canonical.display()
        ));
        return Err(TreeError::io(path, cycle));
    }

    if manifest::has_manifest(&path, &options.manifest_name) {
        debug!(path = %path.display(), "Using manifest for subtree");
        let manifest = manifest::read_manifest(&path, &options.manifest_name)?;
        return Ok(DirectoryEntry::Curated {
            name,
            path,
            manifest,
        });
    }

    ancestors.push(canonical);
    let children = list_directory_within(&path, options, ancestors);
    ancestors.pop();

    Ok(DirectoryEntry::Directory {
        name,
        path,
        children: children?,
    })
}

fn walk_error(dir: &Path, err: walkdir::Error) -> TreeError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    TreeError::io(path, std::io::Error::from(err))
}
