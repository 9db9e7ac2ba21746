//! Junk-file removal.
//!
//! Scrapers and release groups leave `.nfo` and `.txt` files all over a
//! library. Everything matching the junk filter (and any extra glob
//! patterns) is deleted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::junk::JunkFilter;
use crate::ops::report::Plan;
use crate::util::fs::{files_under, glob_files};

/// Plan junk deletion for one content directory.
pub fn plan_junk(root: &Path, filter: &JunkFilter, patterns: &[String]) -> Result<Plan> {
    tracing::info!(
        "deleting junk files ({}) under '{}'",
        filter.extensions().join(", "),
        root.display()
    );

    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();

    for file in files_under(root)? {
        if filter.matches(&file) {
            targets.insert(file);
        }
    }

    for file in glob_files(root, patterns)? {
        targets.insert(file);
    }

    let mut plan = Plan::new();
    for file in targets {
        tracing::debug!("deleting '{}'", file.display());
        plan.delete(file);
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::report::Action;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_deletes_nfo_and_txt() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("Movie (2020)");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("movie.nfo"), "meta").unwrap();
        fs::write(nested.join("release.txt"), "notes").unwrap();
        fs::write(nested.join("movie.mkv"), "video").unwrap();

        let plan = plan_junk(tmp.path(), &JunkFilter::default(), &[]).unwrap();
        let deleted: Vec<_> = plan
            .actions
            .iter()
            .map(|a| match a {
                Action::Delete { path } => path.clone(),
                other => panic!("unexpected action: {other:?}"),
            })
            .collect();

        assert_eq!(deleted.len(), 2);
        assert!(deleted.contains(&nested.join("movie.nfo")));
        assert!(deleted.contains(&nested.join("release.txt")));
    }

    #[test]
    fn test_extra_glob_patterns() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("trailer.sample.mkv"), "x").unwrap();
        fs::write(tmp.path().join("movie.mkv"), "x").unwrap();

        let plan = plan_junk(
            tmp.path(),
            &JunkFilter::default(),
            &["**/*.sample.mkv".to_string()],
        )
        .unwrap();

        assert_eq!(
            plan.actions,
            vec![Action::Delete {
                path: tmp.path().join("trailer.sample.mkv"),
            }]
        );
    }

    #[test]
    fn test_absolute_pattern_cannot_reach_outside_root() {
        let tmp = TempDir::new().unwrap();
        let library = tmp.path().join("library");
        let outside = tmp.path().join("outside");
        fs::create_dir_all(&library).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("precious.txt"), "keep me").unwrap();

        let pattern = format!("{}/*.txt", outside.display());
        let result = plan_junk(&library, &JunkFilter::new(Vec::<String>::new()), &[pattern]);

        // Rejected outright; nothing outside the root ever enters a plan.
        assert!(result.is_err());
        assert!(outside.join("precious.txt").exists());
    }

    #[test]
    fn test_pattern_and_extension_overlap_dedups() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("movie.nfo"), "x").unwrap();

        let plan = plan_junk(
            tmp.path(),
            &JunkFilter::default(),
            &["**/*.nfo".to_string()],
        )
        .unwrap();

        assert_eq!(plan.actions.len(), 1);
    }
}
