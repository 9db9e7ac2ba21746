//! Planned actions and cleaning reports.
//!
//! Every operation first plans what it would do, then the plan is applied
//! (or merely recorded, under `--dry-run`). Keeping planning separate from
//! execution means a pass never mutates the tree it is still walking.

use std::path::PathBuf;

use serde::Serialize;

/// A single planned filesystem mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Rename a file. Never overwrites: planning demotes clobbering
    /// renames to skips or deletes.
    Rename { from: PathBuf, to: PathBuf },

    /// Delete a file.
    Delete { path: PathBuf },

    /// Remove an empty directory.
    PruneDir { path: PathBuf },
}

/// A file deliberately left alone, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
    pub path: PathBuf,
    pub reason: String,
}

/// The output of a planning pass over one content directory.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub actions: Vec<Action>,
    pub skips: Vec<Skip>,
}

impl Plan {
    pub fn new() -> Self {
        Plan::default()
    }

    pub fn rename(&mut self, from: PathBuf, to: PathBuf) {
        self.actions.push(Action::Rename { from, to });
    }

    pub fn delete(&mut self, path: PathBuf) {
        self.actions.push(Action::Delete { path });
    }

    pub fn prune_dir(&mut self, path: PathBuf) {
        self.actions.push(Action::PruneDir { path });
    }

    pub fn skip(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skips.push(Skip {
            path,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.skips.is_empty()
    }
}

/// What happened (or would happen, under dry-run) in one content directory.
#[derive(Debug, Clone, Serialize)]
pub struct DirReport {
    /// The content directory this report covers.
    pub dir: PathBuf,

    /// Renames performed, as (from, to) pairs.
    pub renamed: Vec<(PathBuf, PathBuf)>,

    /// Files deleted.
    pub deleted: Vec<PathBuf>,

    /// Empty directories removed.
    pub pruned: Vec<PathBuf>,

    /// Files left alone on purpose.
    pub skipped: Vec<Skip>,
}

impl DirReport {
    pub fn new(dir: PathBuf) -> Self {
        DirReport {
            dir,
            renamed: Vec::new(),
            deleted: Vec::new(),
            pruned: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Whether nothing was (or would be) touched.
    pub fn is_clean(&self) -> bool {
        self.renamed.is_empty()
            && self.deleted.is_empty()
            && self.pruned.is_empty()
            && self.skipped.is_empty()
    }
}

/// Aggregate report over all cleaned content directories.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Whether this was a dry run (nothing actually touched).
    pub dry_run: bool,

    /// Per-directory results, in input order.
    pub dirs: Vec<DirReport>,
}

impl CleanReport {
    pub fn new(dry_run: bool) -> Self {
        CleanReport {
            dry_run,
            dirs: Vec::new(),
        }
    }

    pub fn renamed_count(&self) -> usize {
        self.dirs.iter().map(|d| d.renamed.len()).sum()
    }

    pub fn deleted_count(&self) -> usize {
        self.dirs.iter().map(|d| d.deleted.len()).sum()
    }

    pub fn pruned_count(&self) -> usize {
        self.dirs.iter().map(|d| d.pruned.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.dirs.iter().map(|d| d.skipped.len()).sum()
    }
}

/// Format a report as human-readable text.
pub fn format_report(report: &CleanReport) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    if report.dry_run {
        writeln!(output, "Dry run: no files were touched.\n").unwrap();
    }

    for dir in &report.dirs {
        writeln!(output, "{}", dir.dir.display()).unwrap();

        if dir.is_clean() {
            writeln!(output, "  nothing to do").unwrap();
            continue;
        }

        for (from, to) in &dir.renamed {
            writeln!(output, "  renamed {} -> {}", from.display(), to.display()).unwrap();
        }
        for path in &dir.deleted {
            writeln!(output, "  deleted {}", path.display()).unwrap();
        }
        for path in &dir.pruned {
            writeln!(output, "  pruned  {}", path.display()).unwrap();
        }
        for skip in &dir.skipped {
            writeln!(
                output,
                "  skipped {} ({})",
                skip.path.display(),
                skip.reason
            )
            .unwrap();
        }
    }

    writeln!(
        output,
        "\nSummary: {} renamed, {} deleted, {} directories pruned, {} skipped",
        report.renamed_count(),
        report.deleted_count(),
        report.pruned_count(),
        report.skipped_count()
    )
    .unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_collects_actions() {
        let mut plan = Plan::new();
        assert!(plan.is_empty());

        plan.rename(PathBuf::from("a.en.srt"), PathBuf::from("a.eng.srt"));
        plan.delete(PathBuf::from("b.nfo"));
        plan.skip(PathBuf::from("c.srt"), "target exists");

        assert_eq!(plan.actions.len(), 2);
        assert_eq!(plan.skips.len(), 1);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_report_counts() {
        let mut report = CleanReport::new(false);
        let mut dir = DirReport::new(PathBuf::from("/media/movies"));
        dir.renamed
            .push((PathBuf::from("a.en.srt"), PathBuf::from("a.eng.srt")));
        dir.deleted.push(PathBuf::from("a.nfo"));
        dir.deleted.push(PathBuf::from("b.txt"));
        report.dirs.push(dir);

        assert_eq!(report.renamed_count(), 1);
        assert_eq!(report.deleted_count(), 2);
        assert_eq!(report.pruned_count(), 0);
    }

    #[test]
    fn test_format_report_clean_dir() {
        let mut report = CleanReport::new(true);
        report.dirs.push(DirReport::new(PathBuf::from("/media/tv")));

        let text = format_report(&report);
        assert!(text.contains("Dry run"));
        assert!(text.contains("nothing to do"));
        assert!(text.contains("Summary: 0 renamed"));
    }

    #[test]
    fn test_action_serializes_with_kind_tag() {
        let action = Action::Delete {
            path: PathBuf::from("x.nfo"),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"kind\":\"delete\""));
    }
}
