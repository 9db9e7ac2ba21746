//! Configuration file support for Mediaclean.
//!
//! Configuration lives in a single user-level TOML file, by default at
//! `~/.config/mediaclean/config.toml` (per-platform via `directories`).
//! The path can be overridden with `--config` or `MEDIACLEAN_CONFIG`.
//!
//! ```toml
//! content_dirs = ["/volume2/data/media/movies", "/volume2/data/media/tv"]
//!
//! [clean]
//! junk_extensions = ["nfo", "txt"]
//! junk_patterns = []
//! prune_empty_dirs = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::junk::{JunkFilter, DEFAULT_JUNK_EXTENSIONS};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Mediaclean configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content directories cleaned when none are given on the command line.
    pub content_dirs: Vec<PathBuf>,

    /// Cleaning settings
    pub clean: CleanConfig,
}

/// Settings for the cleaning passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Extensions deleted by the junk pass.
    pub junk_extensions: Vec<String>,

    /// Extra glob patterns deleted by the junk pass, relative to each
    /// content directory.
    pub junk_patterns: Vec<String>,

    /// Whether `run` prunes empty directories.
    pub prune_empty_dirs: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        CleanConfig {
            junk_extensions: DEFAULT_JUNK_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            junk_patterns: Vec::new(),
            prune_empty_dirs: true,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults if the file is missing.
    ///
    /// A file that exists but does not parse is an error, not a fallback:
    /// silently ignoring a typo in `content_dirs` would clean the wrong
    /// directories.
    pub fn load_if_exists(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config file at '{}', using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// The junk filter described by this configuration.
    pub fn junk_filter(&self) -> JunkFilter {
        JunkFilter::new(&self.clean.junk_extensions)
    }
}

/// The default user-level config path (~/.config/mediaclean/config.toml).
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "mediaclean", "mediaclean")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.content_dirs.is_empty());
        assert_eq!(config.clean.junk_extensions, vec!["nfo", "txt"]);
        assert!(config.clean.junk_patterns.is_empty());
        assert!(config.clean.prune_empty_dirs);
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
content_dirs = ["/volume2/data/media/movies", "/volume2/data/media/tv"]

[clean]
junk_extensions = ["nfo", "txt", "jpg"]
prune_empty_dirs = false
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.content_dirs.len(), 2);
        assert_eq!(
            config.content_dirs[0],
            PathBuf::from("/volume2/data/media/movies")
        );
        assert_eq!(config.clean.junk_extensions, vec!["nfo", "txt", "jpg"]);
        assert!(!config.clean.prune_empty_dirs);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(&config_path, "content_dirs = [\"/media\"]\n").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.clean.junk_extensions, vec!["nfo", "txt"]);
        assert!(config.clean.prune_empty_dirs);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(&config_path, "content_dirs = \"not a list\"\n").unwrap();

        let err = Config::load_if_exists(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_if_exists(&tmp.path().join("absent.toml")).unwrap();
        assert!(config.content_dirs.is_empty());
    }

    #[test]
    fn test_junk_filter_from_config() {
        let mut config = Config::default();
        config.clean.junk_extensions = vec!["sample".to_string()];

        let filter = config.junk_filter();
        assert!(filter.matches(Path::new("trailer.sample")));
        assert!(!filter.matches(Path::new("movie.nfo")));
    }
}
