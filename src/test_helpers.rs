//! Shared test utilities.
//!
//! Provides fixture setup, lookups, and navigation tree assertions that work
//! with built [`NavNode`] trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let tree = build_tree(&section_dir(&tmp, "typescript"), &TreeOptions::default()).unwrap();
//!
//! assert_nav_shape(&tree, &[
//!     ("intro", &[]),
//!     ("advanced", &["deep"]),
//! ]);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::types::NavNode;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Path of a section directory (`src/page/<name>`) inside a fixture copy.
pub fn section_dir(tmp: &TempDir, name: &str) -> PathBuf {
    tmp.path().join("src/page").join(name)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a top-level node by label. Panics if not found.
pub fn find_node<'a>(nodes: &'a [NavNode], label: &str) -> &'a NavNode {
    nodes.iter().find(|n| n.label() == label).unwrap_or_else(|| {
        let labels = nav_labels(nodes);
        panic!("nav item '{label}' not found. Available: {labels:?}")
    })
}

/// Labels of `nodes` in order.
pub fn nav_labels(nodes: &[NavNode]) -> Vec<&str> {
    nodes.iter().map(NavNode::label).collect()
}

/// Every leaf target at any depth, in tree order.
pub fn all_targets(nodes: &[NavNode]) -> Vec<&str> {
    let mut targets = Vec::new();
    for node in nodes {
        match node.target() {
            Some(t) => targets.push(t),
            None => targets.extend(all_targets(node.children())),
        }
    }
    targets
}

/// Assert that a tree's top two levels match an expected shape.
///
/// Each entry is `(label, children)`. Use `&[]` for leaves and empty groups.
pub fn assert_nav_shape(nodes: &[NavNode], expected: &[(&str, &[&str])]) {
    let expected_labels: Vec<&str> = expected.iter().map(|(l, _)| *l).collect();
    assert_eq!(nav_labels(nodes), expected_labels, "nav top-level labels mismatch");

    for (label, children) in expected {
        let node = find_node(nodes, label);
        assert_eq!(
            nav_labels(node.children()),
            children.to_vec(),
            "nav children of '{label}' mismatch"
        );
    }
}
