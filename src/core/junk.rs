//! Junk-file matching.

use std::path::Path;

/// Extensions deleted by default: scraper leftovers and release notes.
pub const DEFAULT_JUNK_EXTENSIONS: [&str; 2] = ["nfo", "txt"];

/// Decides which files count as junk, by final extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkFilter {
    extensions: Vec<String>,
}

impl JunkFilter {
    /// Build a filter from a set of extensions (without the leading dot).
    ///
    /// Matching is case-insensitive; extensions are stored lowercased.
    pub fn new(extensions: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        JunkFilter {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether a path's final extension marks it as junk.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }

    /// The configured extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for JunkFilter {
    fn default() -> Self {
        JunkFilter::new(DEFAULT_JUNK_EXTENSIONS)
    }
}
