//! Multi-section sidebar assembly.
//!
//! A documentation site usually has one sidebar per top-level area, keyed by
//! route prefix:
//!
//! ```json
//! {
//!   "/page/network/":   [ ... ],
//!   "/page/framework/": [ ... ]
//! }
//! ```
//!
//! Each configured section is built with [`crate::tree::build_tree`], one
//! after another, in configuration order. The first failing section aborts
//! the whole sidebar.

use crate::config::{SectionConfig, SidebarConfig};
use crate::content_root::ContentRoot;
use crate::error::TreeError;
use crate::tree::{self, TreeOptions};
use crate::types::NavNode;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Section {route}: {source}")]
    Section {
        route: String,
        #[source]
        source: TreeError,
    },
}

/// A built section.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSection {
    pub route: String,
    /// Directory the section was built from, made absolute.
    pub dir: PathBuf,
    pub content_root: PathBuf,
    pub tree: Vec<NavNode>,
}

/// All sections, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sidebar {
    pub sections: Vec<SidebarSection>,
}

impl Sidebar {
    pub fn get(&self, route: &str) -> Option<&[NavNode]> {
        self.sections
            .iter()
            .find(|s| s.route == route)
            .map(|s| s.tree.as_slice())
    }
}

/// Serializes as a `route → tree` object, preserving section order.
impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.route, &section.tree)?;
        }
        map.end()
    }
}

/// Build every configured section. `base_dir` anchors relative section dirs,
/// normally the directory holding `sidebar.toml`.
pub fn build_sidebar(config: &SidebarConfig, base_dir: &Path) -> Result<Sidebar, SidebarError> {
    let options = config.tree.to_options();
    let sections = config
        .sections
        .iter()
        .map(|section| build_section(section, base_dir, &options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Sidebar { sections })
}

fn build_section(
    section: &SectionConfig,
    base_dir: &Path,
    options: &TreeOptions,
) -> Result<SidebarSection, SidebarError> {
    let wrap = |source: TreeError| SidebarError::Section {
        route: section.route.clone(),
        source,
    };

    let dir = base_dir.join(&section.dir);
    let tree = tree::build_tree(&dir, options).map_err(wrap)?;
    let resolved = tree::validate_root(&dir).map_err(wrap)?;
    let content_root = ContentRoot::locate(&resolved, &options.content_root)
        .map_err(wrap)?
        .path()
        .to_path_buf();

    info!(route = %section.route, dir = %dir.display(), entries = tree.len(), "Built sidebar section");

    Ok(SidebarSection {
        route: section.route.clone(),
        dir: resolved,
        content_root,
        tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn section(route: &str, dir: &str) -> SectionConfig {
        SectionConfig {
            route: route.to_string(),
            dir: dir.to_string(),
        }
    }

    fn site() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let net = tmp.path().join("src/page/network");
        fs::create_dir_all(net.join("02-tcp")).unwrap();
        fs::write(net.join("01-http.md"), "# HTTP").unwrap();
        fs::write(net.join("02-tcp/01-handshake.md"), "# Handshake").unwrap();

        let fw = tmp.path().join("src/page/framework");
        fs::create_dir_all(fw.join("vue")).unwrap();
        fs::write(fw.join("vue/life-cycle.md"), "# Life cycle").unwrap();
        fs::write(
            fw.join("tree.json"),
            r#"[{"text":"vue","collapsed":false,"items":[{"text":"life-cycle"}]}]"#,
        )
        .unwrap();
        tmp
    }

    #[test]
    fn builds_sections_in_config_order() {
        let tmp = site();
        let config = SidebarConfig {
            sections: vec![
                section("/page/network/", "src/page/network"),
                section("/page/framework/", "src/page/framework"),
            ],
            ..SidebarConfig::default()
        };

        let sidebar = build_sidebar(&config, tmp.path()).unwrap();
        let routes: Vec<&str> = sidebar.sections.iter().map(|s| s.route.as_str()).collect();
        assert_eq!(routes, vec!["/page/network/", "/page/framework/"]);

        let network = sidebar.get("/page/network/").unwrap();
        assert_eq!(network[0], NavNode::leaf("http", "page/network/01-http.md"));

        let framework = sidebar.get("/page/framework/").unwrap();
        assert_eq!(
            framework[0],
            NavNode::branch(
                "vue",
                false,
                vec![NavNode::leaf("life-cycle", "page/framework/vue/life-cycle.md")]
            )
        );
    }

    #[test]
    fn serializes_as_route_map() {
        let tmp = site();
        let config = SidebarConfig {
            sections: vec![section("/page/network/", "src/page/network")],
            ..SidebarConfig::default()
        };

        let sidebar = build_sidebar(&config, tmp.path()).unwrap();
        let json = serde_json::to_value(&sidebar).unwrap();
        assert_eq!(
            json["/page/network/"][1]["items"][0]["link"],
            "page/network/02-tcp/01-handshake.md"
        );
        assert_eq!(json["/page/network/"][1]["collapsed"], true);
    }

    #[test]
    fn failing_section_names_its_route() {
        let tmp = site();
        let config = SidebarConfig {
            sections: vec![
                section("/page/network/", "src/page/network"),
                section("/page/missing/", "src/page/missing"),
            ],
            ..SidebarConfig::default()
        };

        let err = build_sidebar(&config, tmp.path()).unwrap_err();
        let SidebarError::Section { route, source } = err;
        assert_eq!(route, "/page/missing/");
        assert_eq!(source.kind(), ErrorKind::InvalidRoot);
    }

    #[test]
    fn no_sections_is_empty_sidebar() {
        let tmp = TempDir::new().unwrap();
        let sidebar = build_sidebar(&SidebarConfig::default(), tmp.path()).unwrap();
        assert!(sidebar.sections.is_empty());
        assert_eq!(serde_json::to_string(&sidebar).unwrap(), "{}");
    }
}
