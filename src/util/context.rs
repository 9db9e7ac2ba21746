//! Global context for Mediaclean operations.
//!
//! Provides centralized access to the working directory, the effective
//! configuration path, and content-directory resolution.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::util::config::{default_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Effective configuration file path, if one could be determined
    config_path: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        Ok(GlobalContext {
            cwd,
            config_path: default_config_path(),
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Override the configuration path (from `--config` / `MEDIACLEAN_CONFIG`).
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.config_path = path;
        }
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the effective configuration path.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load the effective configuration.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config_path {
            Some(path) => Config::load_if_exists(path)
                .with_context(|| format!("failed to load configuration: {}", path.display())),
            None => Ok(Config::default()),
        }
    }

    /// Resolve the content directories to clean.
    ///
    /// Directories given on the command line win; otherwise the configured
    /// `content_dirs` are used. Every directory must exist.
    pub fn resolve_dirs(&self, cli_dirs: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
        let dirs: Vec<PathBuf> = if cli_dirs.is_empty() {
            config.content_dirs.clone()
        } else {
            cli_dirs
                .iter()
                .map(|dir| {
                    if dir.is_absolute() {
                        dir.clone()
                    } else {
                        self.cwd.join(dir)
                    }
                })
                .collect()
        };

        if dirs.is_empty() {
            bail!(
                "no content directories given\n\
                 \n\
                 help: pass one or more directories, or set `content_dirs` in the config file"
            );
        }

        for dir in &dirs {
            if !dir.is_dir() {
                bail!(
                    "content directory does not exist: {}\n\
                     \n\
                     help: run `mediaclean config` to inspect the effective configuration",
                    dir.display()
                );
            }
        }

        // Overlapping roots would have the parallel passes racing each
        // other's renames and prunes.
        let canonical: Vec<PathBuf> = dirs
            .iter()
            .map(|dir| dir.canonicalize().unwrap_or_else(|_| dir.clone()))
            .collect();
        for i in 0..canonical.len() {
            for j in 0..canonical.len() {
                if i != j && canonical[i].starts_with(&canonical[j]) {
                    bail!(
                        "content directories overlap: {} and {}",
                        dirs[i].display(),
                        dirs[j].display()
                    );
                }
            }
        }

        Ok(dirs)
    }
}
