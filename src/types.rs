//! Shared types for the listing, manifest and navigation stages.
//!
//! [`NavNode`] is the contract with the site framework: it serializes to the
//! sidebar schema the theme layer expects (`{text, link}` for pages,
//! `{text, collapsed, items}` for groups).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A navigation entry in the emitted sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Collapsible group of entries.
    Branch {
        #[serde(rename = "text")]
        label: String,
        collapsed: bool,
        #[serde(rename = "items")]
        children: Vec<NavNode>,
    },
    /// Link to a single page.
    Leaf {
        #[serde(rename = "text")]
        label: String,
        #[serde(rename = "link")]
        target: String,
    },
}

impl NavNode {
    pub fn leaf(label: impl Into<String>, target: impl Into<String>) -> Self {
        NavNode::Leaf {
            label: label.into(),
            target: target.into(),
        }
    }

    pub fn branch(label: impl Into<String>, collapsed: bool, children: Vec<NavNode>) -> Self {
        NavNode::Branch {
            label: label.into(),
            collapsed,
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavNode::Branch { label, .. } | NavNode::Leaf { label, .. } => label,
        }
    }

    /// Link target for leaves, `None` for branches.
    pub fn target(&self) -> Option<&str> {
        match self {
            NavNode::Leaf { target, .. } => Some(target),
            NavNode::Branch { .. } => None,
        }
    }

    /// Children of a branch; empty for leaves.
    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Branch { children, .. } => children,
            NavNode::Leaf { .. } => &[],
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, NavNode::Branch { .. })
    }
}

/// Nesting depth of a forest: 0 when empty, 1 for leaves only.
///
/// An empty branch counts as one level, matching an empty directory.
pub fn depth(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + depth(n.children()))
        .max()
        .unwrap_or(0)
}

/// A node from the filesystem listing phase.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryEntry {
    File {
        name: String,
        path: PathBuf,
    },
    Directory {
        name: String,
        path: PathBuf,
        children: Vec<DirectoryEntry>,
    },
    /// A subdirectory that carries its own manifest; its on-disk entries are
    /// not listed.
    Curated {
        name: String,
        path: PathBuf,
        manifest: Vec<ManifestEntry>,
    },
}

impl DirectoryEntry {
    pub fn name(&self) -> &str {
        match self {
            DirectoryEntry::File { name, .. }
            | DirectoryEntry::Directory { name, .. }
            | DirectoryEntry::Curated { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DirectoryEntry::File { path, .. }
            | DirectoryEntry::Directory { path, .. }
            | DirectoryEntry::Curated { path, .. } => path,
        }
    }
}

/// One record of a `tree.json` manifest.
///
/// `{"text": "A"}` is a page; `{"text": "B", "items": [...]}` is a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ManifestEntry>>,
    /// Per-group override of the configured collapse state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

/// Where a subtree takes its order and grouping from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Filesystem listing order.
    Directory,
    /// A curated manifest file in the root directory.
    Manifest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_serializes_as_text_link() {
        let json = serde_json::to_value(NavNode::leaf("intro", "page/01-intro.md")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "intro", "link": "page/01-intro.md"})
        );
    }

    #[test]
    fn branch_serializes_as_text_collapsed_items() {
        let node = NavNode::branch("advanced", true, vec![NavNode::leaf("deep", "a/01-deep.md")]);
        let json = serde_json::to_value(node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "advanced",
                "collapsed": true,
                "items": [{"text": "deep", "link": "a/01-deep.md"}]
            })
        );
    }

    #[test]
    fn nav_node_deserializes_both_shapes() {
        let nodes: Vec<NavNode> = serde_json::from_str(
            r#"[{"text":"a","link":"a.md"},{"text":"b","collapsed":false,"items":[]}]"#,
        )
        .unwrap();
        assert_eq!(nodes[0], NavNode::leaf("a", "a.md"));
        assert_eq!(nodes[1], NavNode::branch("b", false, vec![]));
    }

    #[test]
    fn depth_of_forest() {
        assert_eq!(depth(&[]), 0);
        assert_eq!(depth(&[NavNode::leaf("a", "a.md")]), 1);
        let nested = NavNode::branch(
            "x",
            true,
            vec![NavNode::branch("y", true, vec![NavNode::leaf("z", "z.md")])],
        );
        assert_eq!(depth(&[NavNode::leaf("a", "a.md"), nested]), 3);
        assert_eq!(depth(&[NavNode::branch("empty", true, vec![])]), 1);
    }

    #[test]
    fn manifest_entry_rejects_unknown_keys() {
        let result: Result<ManifestEntry, _> = serde_json::from_str(r#"{"text":"a","link":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn manifest_entry_items_optional() {
        let entry: ManifestEntry = serde_json::from_str(r#"{"text":"a"}"#).unwrap();
        assert_eq!(entry.items, None);
        assert_eq!(entry.collapsed, None);
    }
}
