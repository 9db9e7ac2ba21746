//! Implementation of the cleaning pipeline.
//!
//! `clean_dir` runs the enabled passes over one content directory in a
//! fixed order: subtitle repair, language normalization, junk removal,
//! empty-directory pruning. Each pass is planned against the tree as the
//! previous pass left it, so junk removal sees renamed subtitles and
//! pruning sees directories emptied by junk removal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use rayon::prelude::*;

use crate::core::junk::JunkFilter;
use crate::ops::empty_dirs::plan_empty_dirs;
use crate::ops::forced_subs::plan_forced_subs;
use crate::ops::junk::plan_junk;
use crate::ops::lang_subs::plan_lang_subs;
use crate::ops::report::{Action, CleanReport, DirReport, Plan};

/// Options for the cleaning pipeline.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Run the subtitle passes (forced repair + en -> eng).
    pub subs: bool,

    /// Run junk-file removal.
    pub junk: bool,

    /// Run empty-directory pruning.
    pub prune: bool,

    /// Plan only; do not touch the filesystem.
    pub dry_run: bool,

    /// Junk extension filter.
    pub junk_filter: JunkFilter,

    /// Extra glob patterns for junk removal.
    pub junk_patterns: Vec<String>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        CleanOptions {
            subs: true,
            junk: true,
            prune: true,
            dry_run: false,
            junk_filter: JunkFilter::default(),
            junk_patterns: Vec::new(),
        }
    }
}

/// Clean several content directories, in parallel.
///
/// Reports come back in input order regardless of completion order.
pub fn clean_all(dirs: &[PathBuf], opts: &CleanOptions) -> Result<CleanReport> {
    let results: Vec<Result<DirReport>> =
        dirs.par_iter().map(|dir| clean_dir(dir, opts)).collect();

    let mut report = CleanReport::new(opts.dry_run);
    for result in results {
        report.dirs.push(result?);
    }
    Ok(report)
}

/// Clean a single content directory.
pub fn clean_dir(dir: &Path, opts: &CleanOptions) -> Result<DirReport> {
    ensure!(
        dir.is_dir(),
        "content directory does not exist: {}",
        dir.display()
    );

    tracing::info!("cleaning media for content dir: '{}'", dir.display());
    let mut report = DirReport::new(dir.to_path_buf());

    if opts.subs {
        run_pass(plan_forced_subs(dir)?, &mut report, opts.dry_run)?;
        run_pass(plan_lang_subs(dir)?, &mut report, opts.dry_run)?;
    }

    if opts.junk {
        let plan = plan_junk(dir, &opts.junk_filter, &opts.junk_patterns)?;
        run_pass(plan, &mut report, opts.dry_run)?;
    }

    if opts.prune {
        run_pass(plan_empty_dirs(dir)?, &mut report, opts.dry_run)?;
    }

    Ok(report)
}

/// Apply a plan (or just record it, under dry-run).
fn run_pass(plan: Plan, report: &mut DirReport, dry_run: bool) -> Result<()> {
    for action in plan.actions {
        match action {
            Action::Rename { from, to } => {
                if !dry_run {
                    fs::rename(&from, &to).with_context(|| {
                        format!("failed to rename {} to {}", from.display(), to.display())
                    })?;
                }
                report.renamed.push((from, to));
            }
            Action::Delete { path } => {
                if !dry_run {
                    fs::remove_file(&path)
                        .with_context(|| format!("failed to delete: {}", path.display()))?;
                }
                report.deleted.push(path);
            }
            Action::PruneDir { path } => {
                if !dry_run {
                    // remove_dir refuses non-empty directories, a second
                    // guard on top of the plan's own emptiness check.
                    fs::remove_dir(&path).with_context(|| {
                        format!("failed to remove directory: {}", path.display())
                    })?;
                }
                report.pruned.push(path);
            }
        }
    }

    report.skipped.extend(plan.skips);
    Ok(())
}
