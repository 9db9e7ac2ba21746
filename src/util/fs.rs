//! Filesystem utilities.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{ensure, Context, Result};
use glob::glob;
use walkdir::WalkDir;

/// Recursively collect regular files whose name ends with `suffix`.
///
/// Symlinks are not followed. Results are sorted for deterministic plans.
pub fn files_with_suffix(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(suffix) {
                results.push(entry.into_path());
            }
        }
    }

    results.sort();
    Ok(results)
}

/// Recursively collect all regular files under `root`, sorted.
pub fn files_under(root: &Path) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_file() {
            results.push(entry.into_path());
        }
    }

    results.sort();
    Ok(results)
}

/// Find files matching glob patterns relative to a base directory.
///
/// Patterns must stay inside `base`: absolute patterns and patterns with
/// `..` components are rejected, so a match can never name a file outside
/// the directory being cleaned.
pub fn glob_files(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for pattern in patterns {
        let rel = Path::new(pattern);
        ensure!(
            !rel.is_absolute()
                && !rel.components().any(|c| matches!(c, Component::ParentDir)),
            "glob pattern must stay inside the base directory: {}",
            pattern
        );

        let full_pattern = base.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        for entry in
            glob(&pattern_str).with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            match entry {
                Ok(path) => {
                    if path.is_file() && path.starts_with(base) {
                        results.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

/// Collect directories strictly below `root`, deepest first.
///
/// The ordering lets callers prune nested empty trees in a single pass:
/// a child is always visited before its parent.
pub fn dirs_bottom_up(root: &Path) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", root.display()))?;
        if entry.file_type().is_dir() {
            results.push(entry.into_path());
        }
    }

    Ok(results)
}

/// Whether a directory has no entries at all.
pub fn is_dir_empty(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?;
    Ok(entries.next().is_none())
}
