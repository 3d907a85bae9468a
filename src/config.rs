//! Sidebar configuration module.
//!
//! Handles loading, validating, and merging `sidebar.toml`. Stock defaults are
//! overridden by whatever keys the user file sets; everything else keeps its
//! default.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [tree]
//! prefix_width = 2              # Ordering-prefix width in characters
//! separator = "-"               # Dropped once after the prefix ("" = none)
//! exclude = ["images"]          # Directory-name substrings never traversed
//! content_root = "src"          # Ancestor directory that links are relative to
//! manifest_name = "tree.json"   # Curated-order file that opts a subtree in
//! collapsed = true              # Initial state of generated groups
//! include_hidden = false        # List dot-files and dot-directories
//! link_style = "file"           # "file" (page/01-a.md) or "route" (/page/01-a)
//!
//! [[sections]]
//! route = "/page/typescript/"   # Route prefix the sidebar applies to
//! dir = "src/page/typescript"   # Directory, relative to the config file
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::content_root::{self, LinkStyle};
use crate::manifest::MANIFEST_FILE_NAME;
use crate::naming::{self, OrderingPrefix};
use crate::tree::{self, TreeOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "sidebar.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Sidebar configuration loaded from `sidebar.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Tree-building settings shared by all sections.
    pub tree: TreeConfig,
    /// Sidebar sections, in output order.
    pub sections: Vec<SectionConfig>,
}

/// Tree-building settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    pub prefix_width: usize,
    pub separator: String,
    pub exclude: Vec<String>,
    pub content_root: String,
    pub manifest_name: String,
    pub collapsed: bool,
    pub include_hidden: bool,
    pub link_style: LinkStyle,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            prefix_width: naming::DEFAULT_PREFIX_WIDTH,
            separator: naming::DEFAULT_SEPARATOR.to_string(),
            exclude: vec![tree::DEFAULT_EXCLUDE.to_string()],
            content_root: content_root::DEFAULT_SENTINEL.to_string(),
            manifest_name: MANIFEST_FILE_NAME.to_string(),
            collapsed: true,
            include_hidden: false,
            link_style: LinkStyle::File,
        }
    }
}

impl TreeConfig {
    pub fn to_options(&self) -> TreeOptions {
        TreeOptions {
            prefix: OrderingPrefix::new(self.prefix_width, self.separator.clone()),
            exclude: self.exclude.clone(),
            content_root: self.content_root.clone(),
            manifest_name: self.manifest_name.clone(),
            collapsed: self.collapsed,
            include_hidden: self.include_hidden,
            link_style: self.link_style,
        }
    }
}

/// One sidebar section: a route prefix and the directory that feeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    pub route: String,
    pub dir: String,
}

impl SidebarConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tree = &self.tree;
        if tree.prefix_width == 0 {
            return Err(ConfigError::Validation(
                "tree.prefix_width must be at least 1".into(),
            ));
        }
        if tree.content_root.is_empty() {
            return Err(ConfigError::Validation(
                "tree.content_root must not be empty".into(),
            ));
        }
        if tree.manifest_name.is_empty() || tree.manifest_name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "tree.manifest_name must be a plain file name".into(),
            ));
        }
        if tree.exclude.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "tree.exclude patterns must not be empty".into(),
            ));
        }

        let mut routes = HashSet::new();
        for section in &self.sections {
            if !section.route.starts_with('/') || !section.route.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "section route `{}` must start and end with `/`",
                    section.route
                )));
            }
            if section.dir.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "section `{}` has an empty dir",
                    section.route
                )));
            }
            if !routes.insert(section.route.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate section route `{}`",
                    section.route
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SidebarConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SidebarConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SidebarConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults if it is absent.
pub fn load_config(path: &Path) -> Result<SidebarConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `sidebar.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Sidebar Tree Configuration
# ==========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Tree building
# ---------------------------------------------------------------------------
[tree]
# Width of the ordering prefix, in characters. "01-intro.md" uses 2.
# Names shorter than this fail the build.
prefix_width = 2

# Separator dropped once after the prefix. Use "" for none.
separator = "-"

# Directories whose name contains any of these are never traversed.
exclude = ["images"]

# Links are relative to the nearest ancestor directory with this name.
content_root = "src"

# A directory holding this file takes its order from it instead of the
# filesystem.
manifest_name = "tree.json"

# Whether generated groups start collapsed.
collapsed = true

# List dot-files and dot-directories.
include_hidden = false

# "file"  -> page/typescript/01-intro.md
# "route" -> /page/typescript/01-intro
link_style = "file"

# ---------------------------------------------------------------------------
# Sections
# ---------------------------------------------------------------------------
# One block per sidebar. `dir` is relative to this file.
#
# [[sections]]
# route = "/page/typescript/"
# dir = "src/page/typescript"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_tree_settings() {
        let config = SidebarConfig::default();
        assert_eq!(config.tree.prefix_width, 2);
        assert_eq!(config.tree.separator, "-");
        assert_eq!(config.tree.exclude, vec!["images"]);
        assert_eq!(config.tree.content_root, "src");
        assert_eq!(config.tree.manifest_name, "tree.json");
        assert!(config.tree.collapsed);
        assert_eq!(config.tree.link_style, LinkStyle::File);
        assert!(config.sections.is_empty());
    }

    #[test]
    fn default_config_matches_default_options() {
        assert_eq!(TreeConfig::default().to_options(), TreeOptions::default());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[tree]
prefix_width = 3
link_style = "route"
"#;
        let config: SidebarConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.tree.prefix_width, 3);
        assert_eq!(config.tree.link_style, LinkStyle::Route);
        assert_eq!(config.tree.exclude, vec!["images"]);
    }

    #[test]
    fn parse_sections_in_order() {
        let toml = r#"
[[sections]]
route = "/page/network/"
dir = "src/page/network"

[[sections]]
route = "/page/framework/"
dir = "src/page/framework"
"#;
        let config: SidebarConfig = toml::from_str(toml).unwrap();
        let routes: Vec<&str> = config.sections.iter().map(|s| s.route.as_str()).collect();
        assert_eq!(routes, vec!["/page/network/", "/page/framework/"]);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<SidebarConfig, _> = toml::from_str("[tree]\nprefix = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SidebarConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.tree, TreeConfig::default());
        assert!(config.sections.is_empty());
    }

    #[test]
    fn merge_overrides_only_given_keys() {
        let overlay: toml::Value = toml::from_str("[tree]\ncollapsed = false\n").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert!(!config.tree.collapsed);
        assert_eq!(config.tree.prefix_width, 2);
    }

    #[test]
    fn merge_replaces_arrays() {
        let overlay: toml::Value =
            toml::from_str("[tree]\nexclude = [\"assets\", \"public\"]\n").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.tree.exclude, vec!["assets", "public"]);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn invalid(toml: &str) -> ConfigError {
        let overlay: toml::Value = toml::from_str(toml).unwrap();
        resolve_config(stock_defaults_value(), Some(overlay)).unwrap_err()
    }

    #[test]
    fn zero_prefix_width_rejected() {
        assert!(matches!(
            invalid("[tree]\nprefix_width = 0\n"),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn empty_exclude_pattern_rejected() {
        assert!(matches!(
            invalid("[tree]\nexclude = [\"\"]\n"),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn manifest_name_with_slash_rejected() {
        assert!(matches!(
            invalid("[tree]\nmanifest_name = \"a/tree.json\"\n"),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn route_without_slashes_rejected() {
        let err = invalid("[[sections]]\nroute = \"page\"\ndir = \"src/page\"\n");
        assert!(err.to_string().contains("must start and end"));
    }

    #[test]
    fn duplicate_routes_rejected() {
        let err = invalid(
            "[[sections]]\nroute = \"/a/\"\ndir = \"src/a\"\n\n[[sections]]\nroute = \"/a/\"\ndir = \"src/b\"\n",
        );
        assert!(err.to_string().contains("duplicate"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.tree, TreeConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
[tree]
content_root = "docs"

[[sections]]
route = "/guide/"
dir = "docs/guide"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.tree.content_root, "docs");
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].dir, "docs/guide");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
