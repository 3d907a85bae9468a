//! Ordering-prefix parsing for the `NN-name` convention.
//!
//! Every file and directory in a content tree starts with a fixed-width
//! ordering prefix that controls display order and is never shown to the
//! reader:
//!
//! - `01-intro.md` → "intro"
//! - `02-advanced/` → "advanced"
//! - `03函数与泛型.md` → "函数与泛型" (no separator, width still applies)
//!
//! The width is a configured constant, not inferred per entry. It is counted
//! in characters, so non-ASCII names strip the same way as ASCII ones. After
//! the prefix, one separator (default `-`) is dropped if present.

use std::path::Path;

/// Default prefix width in characters.
pub const DEFAULT_PREFIX_WIDTH: usize = 2;

/// Default separator between prefix and label.
pub const DEFAULT_SEPARATOR: &str = "-";

/// The name was too short to carry an ordering prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTooShort {
    pub width: usize,
}

/// Fixed-width ordering prefix rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingPrefix {
    /// Number of leading characters reserved for ordering.
    pub width: usize,
    /// Separator removed once after the prefix. Empty means none.
    pub separator: String,
}

impl Default for OrderingPrefix {
    fn default() -> Self {
        Self {
            width: DEFAULT_PREFIX_WIDTH,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl OrderingPrefix {
    pub fn new(width: usize, separator: impl Into<String>) -> Self {
        Self {
            width,
            separator: separator.into(),
        }
    }

    /// Strip the prefix (and one separator) from `name`.
    ///
    /// Names shorter than the width are rejected rather than passed through,
    /// since an unprefixed label would sort and display wrong.
    pub fn strip<'a>(&self, name: &'a str) -> Result<&'a str, NameTooShort> {
        let cut = match name.char_indices().nth(self.width) {
            Some((idx, _)) => idx,
            None if name.chars().count() == self.width => name.len(),
            None => return Err(NameTooShort { width: self.width }),
        };
        let rest = &name[cut..];
        if self.separator.is_empty() {
            return Ok(rest);
        }
        Ok(rest.strip_prefix(self.separator.as_str()).unwrap_or(rest))
    }

    /// Label for a directory: the prefix-stripped name.
    pub fn directory_label(&self, name: &str) -> Result<String, NameTooShort> {
        self.strip(name).map(str::to_string)
    }

    /// Label for a file: the prefix-stripped name without its extension.
    ///
    /// The width check applies to the full file name, extension included.
    /// A name that is only prefix and extension (`01.md`) yields an empty
    /// label, the same as a name exactly as wide as the prefix.
    pub fn file_label(&self, name: &str) -> Result<String, NameTooShort> {
        let stripped = self.strip(name)?;
        if let Some(ext) = stripped.strip_prefix('.') {
            if !ext.contains('.') {
                return Ok(String::new());
            }
        }
        let stem = Path::new(stripped)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(stem)
    }
}
