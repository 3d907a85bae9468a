//! CLI output formatting.
//!
//! Output is an outline of the sidebar as a reader will see it: positional
//! index and label first, with the link target as an indented context line.
//!
//! ```text
//! /page/typescript/
//!     Source: src/page/typescript
//!     001 intro
//!         Link: page/typescript/01-intro.md
//!     002 advanced (1 entry)
//!         001 deep
//!             Link: page/typescript/02-advanced/01-deep.md
//!
//! Built 1 section, 2 pages
//! ```
//!
//! Each `format_*` function is pure and returns lines; the `print_*`
//! wrappers write them to stdout.

use crate::check::MissingTarget;
use crate::sidebar::Sidebar;
use crate::types::NavNode;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format a group header: index, label, and direct child count.
///
/// ```text
/// 002 advanced (3 entries)
/// ```
fn group_header(index: usize, label: &str, count: usize) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        label,
        plural(count, "entry", "entries")
    )
}

/// Number of leaves at any depth.
pub fn count_pages(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|n| match n {
            NavNode::Leaf { .. } => 1,
            NavNode::Branch { children, .. } => count_pages(children),
        })
        .sum()
}

/// Format one tree as an indented outline starting at `depth`.
pub fn format_tree(nodes: &[NavNode], depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    format_tree_into(nodes, depth, &mut lines);
    lines
}

fn format_tree_into(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for (i, node) in nodes.iter().enumerate() {
        match node {
            NavNode::Leaf { label, target } => {
                lines.push(format!("{}{} {}", pad, format_index(i + 1), label));
                lines.push(format!("{}    Link: {}", pad, target));
            }
            NavNode::Branch {
                label,
                collapsed,
                children,
            } => {
                let mut header = group_header(i + 1, label, children.len());
                if !collapsed {
                    header.push_str(" [expanded]");
                }
                lines.push(format!("{}{}", pad, header));
                format_tree_into(children, depth + 1, lines);
            }
        }
    }
}

/// Format every section of a built sidebar, followed by a summary line.
pub fn format_sidebar_output(sidebar: &Sidebar) -> Vec<String> {
    let mut lines = Vec::new();
    for section in &sidebar.sections {
        lines.push(section.route.clone());
        lines.push(format!("    Source: {}", section.dir.display()));
        lines.extend(format_tree(&section.tree, 1));
        lines.push(String::new());
    }

    let pages: usize = sidebar.sections.iter().map(|s| count_pages(&s.tree)).sum();
    lines.push(format!(
        "Built {}, {}",
        plural(sidebar.sections.len(), "section", "sections"),
        plural(pages, "page", "pages")
    ));
    lines
}

/// Format dangling link targets, grouped under their section route.
pub fn format_missing_targets(missing: &[(String, MissingTarget)]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    for (route, target) in missing {
        if current != Some(route.as_str()) {
            lines.push(format!("Missing targets in {}", route));
            current = Some(route.as_str());
        }
        lines.push(format!("    {} → {}", target.label, target.target));
    }
    lines
}

/// Print a single tree to stdout.
pub fn print_tree(nodes: &[NavNode]) {
    for line in format_tree(nodes, 0) {
        println!("{}", line);
    }
}

/// Print sidebar output to stdout.
pub fn print_sidebar_output(sidebar: &Sidebar) {
    for line in format_sidebar_output(sidebar) {
        println!("{}", line);
    }
}

/// Print missing-target report to stdout.
pub fn print_missing_targets(missing: &[(String, MissingTarget)]) {
    for line in format_missing_targets(missing) {
        println!("{}", line);
    }
}
