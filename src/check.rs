//! Link-target verification.
//!
//! Every leaf's target must name a file that exists under the content root.
//! Directory mode gets this for free; manifest mode derives targets from
//! labels, so a renamed page or a typo in `tree.json` only shows up here.

use crate::content_root::LinkStyle;
use crate::sidebar::Sidebar;
use crate::types::NavNode;
use std::path::Path;

/// A leaf whose target does not resolve to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTarget {
    pub label: String,
    pub target: String,
}

/// Collect every leaf in `nodes` whose target is missing under `content_root`.
pub fn missing_targets(
    nodes: &[NavNode],
    content_root: &Path,
    link_style: LinkStyle,
) -> Vec<MissingTarget> {
    let mut missing = Vec::new();
    collect_missing(nodes, content_root, link_style, &mut missing);
    missing
}

fn collect_missing(
    nodes: &[NavNode],
    content_root: &Path,
    link_style: LinkStyle,
    missing: &mut Vec<MissingTarget>,
) {
    for node in nodes {
        match node {
            NavNode::Branch { children, .. } => {
                collect_missing(children, content_root, link_style, missing);
            }
            NavNode::Leaf { label, target } => {
                let exists = link_style
                    .candidates(target)
                    .iter()
                    .any(|rel| content_root.join(rel).is_file());
                if !exists {
                    missing.push(MissingTarget {
                        label: label.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }
}

/// Missing targets across every section, paired with the section route.
pub fn check_sidebar(sidebar: &Sidebar, link_style: LinkStyle) -> Vec<(String, MissingTarget)> {
    sidebar
        .sections
        .iter()
        .flat_map(|section| {
            missing_targets(&section.tree, &section.content_root, link_style)
                .into_iter()
                .map(|m| (section.route.clone(), m))
        })
        .collect()
}
