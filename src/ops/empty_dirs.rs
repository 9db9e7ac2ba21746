//! Empty-directory pruning.
//!
//! Directories are visited deepest-first, so a directory whose only
//! contents are other directories pruned in the same pass is itself
//! pruned. The content root is never removed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ops::report::Plan;
use crate::util::fs::dirs_bottom_up;

/// Plan empty-directory removal for one content directory.
pub fn plan_empty_dirs(root: &Path) -> Result<Plan> {
    tracing::info!("pruning empty directories under '{}'", root.display());

    let mut plan = Plan::new();
    let mut pruned: HashSet<PathBuf> = HashSet::new();

    for dir in dirs_bottom_up(root)? {
        if is_effectively_empty(&dir, &pruned)? {
            tracing::debug!("pruning empty directory '{}'", dir.display());
            pruned.insert(dir.clone());
            plan.prune_dir(dir);
        }
    }

    Ok(plan)
}

/// A directory is effectively empty when every entry is a directory
/// already marked for pruning in this pass.
fn is_effectively_empty(dir: &Path, pruned: &HashSet<PathBuf>) -> Result<bool> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read directory: {}", dir.display()))?;
        if !pruned.contains(&entry.path()) {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::report::Action;
    use tempfile::TempDir;

    #[test]
    fn test_prunes_empty_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty")).unwrap();

        let plan = plan_empty_dirs(tmp.path()).unwrap();
        assert_eq!(
            plan.actions,
            vec![Action::PruneDir {
                path: tmp.path().join("empty"),
            }]
        );
    }

    #[test]
    fn test_nested_empty_tree_collapses() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b/c")).unwrap();

        let plan = plan_empty_dirs(tmp.path()).unwrap();
        assert_eq!(plan.actions.len(), 3);
        // Children before parents, so apply can use remove_dir.
        assert_eq!(
            plan.actions[0],
            Action::PruneDir {
                path: tmp.path().join("a/b/c"),
            }
        );
        assert_eq!(
            plan.actions[2],
            Action::PruneDir {
                path: tmp.path().join("a"),
            }
        );
    }

    #[test]
    fn test_keeps_non_empty_directories() {
        let tmp = TempDir::new().unwrap();
        let show = tmp.path().join("Show/Season 1");
        fs::create_dir_all(&show).unwrap();
        fs::write(show.join("ep1.mkv"), "video").unwrap();

        let plan = plan_empty_dirs(tmp.path()).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_root_is_never_pruned() {
        let tmp = TempDir::new().unwrap();

        let plan = plan_empty_dirs(tmp.path()).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_partial_tree() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Show/Season 1")).unwrap();
        fs::create_dir_all(tmp.path().join("Show/Season 2")).unwrap();
        fs::write(tmp.path().join("Show/Season 1/ep1.mkv"), "video").unwrap();

        let plan = plan_empty_dirs(tmp.path()).unwrap();
        // Only Season 2 goes; Show still holds Season 1.
        assert_eq!(
            plan.actions,
            vec![Action::PruneDir {
                path: tmp.path().join("Show/Season 2"),
            }]
        );
    }
}
