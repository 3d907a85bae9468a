//! # Sidebar Tree
//!
//! Builds documentation-site sidebars from the content directory itself.
//! Directories become collapsible groups, markdown files become links, and a
//! fixed-width numeric prefix on every name (`01-intro.md`) sets the order
//! without ever reaching the reader.
//!
//! # Two Ways to Order a Section
//!
//! ```text
//! src/page/typescript/           directory mode: names decide order
//! ├── 01-intro.md                → { text: "intro", link: ... }
//! ├── 02-advanced/               → { text: "advanced", collapsed: true, items: [...] }
//! │   └── 01-deep.md
//! └── images/                    → excluded, never listed
//!
//! src/page/framework/            manifest mode: tree.json decides order
//! ├── tree.json                  [{"text":"vue","items":[{"text":"life-cycle"}]}]
//! └── vue/life-cycle.md
//! ```
//!
//! A `tree.json` in any directory switches that subtree to manifest mode, so a
//! numbered section can contain a hand-curated one.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`tree`] | The two build operations, mode selection, listing → navigation |
//! | [`scan`] | Filesystem listing with exclusions and nested manifests |
//! | [`manifest`] | `tree.json` reading and parsing |
//! | [`naming`] | Fixed-width ordering-prefix stripping |
//! | [`content_root`] | Content-root lookup, `/`-separated targets, link styles |
//! | [`sidebar`] | Route-keyed multi-section sidebars |
//! | [`check`] | Dangling link detection |
//! | [`config`] | `sidebar.toml` loading, merging, validation |
//! | [`output`] | CLI outline formatting |
//! | [`types`] | `NavNode`, `DirectoryEntry`, `ManifestEntry`, `BuildMode` |
//! | [`error`] | `TreeError` and its `ErrorKind` classification |
//!
//! # Failure Policy
//!
//! Builds are all-or-nothing. A name too short for its prefix, an unreadable
//! directory, or a broken manifest fails the build with the offending path;
//! a sidebar that quietly drops pages is never emitted.

pub mod check;
pub mod config;
pub mod content_root;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sidebar;
pub mod tree;
pub mod types;

pub use error::{ErrorKind, TreeError};
pub use tree::{TreeOptions, build_tree, build_tree_from_directory, build_tree_from_manifest};
pub use types::{BuildMode, NavNode};

#[cfg(test)]
pub(crate) mod test_helpers;
