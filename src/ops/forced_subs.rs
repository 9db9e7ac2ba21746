//! Repair of numbered original/forced subtitle pairs.
//!
//! When Sonarr or Radarr import a release carrying both a full and a forced
//! subtitle, the pair sometimes ends up as `<stem>.1.<lang>.srt` and
//! `<stem>.2.<lang>.srt`. The track-1 file is the full subtitle and is
//! renamed to `<stem>.eng.srt`; the track-2 file is judged by size before
//! being renamed to `<stem>.eng.forced.srt`, deleted as a duplicate, or
//! left for manual review.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::subtitle::{classify_forced, ForcedVerdict, SubtitleFile, SUBTITLE_LANGS};
use crate::ops::report::Plan;
use crate::util::fs::files_with_suffix;

/// Plan the forced-pair repair for one content directory.
pub fn plan_forced_subs(root: &Path) -> Result<Plan> {
    tracing::info!("repairing forced subtitles under '{}'", root.display());

    let mut plan = Plan::new();
    // Targets claimed by an earlier rename in this same plan.
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for lang in SUBTITLE_LANGS {
        let suffix = format!(".1.{lang}.srt");
        for orig in files_with_suffix(root, &suffix)? {
            tracing::debug!("found track-1 subtitle: '{}'", orig.display());

            let Some(sub) = SubtitleFile::parse(&orig) else {
                continue;
            };

            let target = sub.canonical();
            if target.exists() || claimed.contains(&target) {
                plan.skip(
                    orig.clone(),
                    format!("rename target already exists: {}", target.display()),
                );
            } else {
                claimed.insert(target.clone());
                plan.rename(orig.clone(), target);
            }

            let forced = sub.sibling(2);
            if !forced.exists() {
                continue;
            }
            tracing::debug!("found track-2 candidate: '{}'", forced.display());

            let orig_size = file_size(&orig)?;
            let forced_size = file_size(&forced)?;

            match classify_forced(orig_size, forced_size) {
                ForcedVerdict::Duplicate => {
                    tracing::info!(
                        "'{}' is at least as large as the original, deleting",
                        forced.display()
                    );
                    plan.delete(forced);
                }
                ForcedVerdict::Suspicious => {
                    tracing::warn!(
                        "'{}' might not be a forced file, it's pretty big; check manually",
                        forced.display()
                    );
                    plan.skip(forced, "too large to be a forced subtitle");
                }
                ForcedVerdict::Forced => {
                    let forced_target = sub.canonical_forced();
                    if forced_target.exists() || claimed.contains(&forced_target) {
                        plan.skip(
                            forced,
                            format!(
                                "rename target already exists: {}",
                                forced_target.display()
                            ),
                        );
                    } else {
                        claimed.insert(forced_target.clone());
                        plan.rename(forced, forced_target);
                    }
                }
            }
        }
    }

    Ok(plan)
}

fn file_size(path: &Path) -> Result<u64> {
    let meta = path
        .metadata()
        .with_context(|| format!("failed to stat: {}", path.display()))?;
    Ok(meta.len())
}
