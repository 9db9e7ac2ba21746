//! Normalization of `.en.srt` subtitles to the three-letter `.eng.srt` form.
//!
//! tdarr and Bazarr both emit the three-letter ISO code, so the two-letter
//! files are stragglers from older imports. When the `.eng.srt` twin
//! already exists the `.en.srt` file is a leftover and is deleted instead
//! of renamed.

use std::path::Path;

use anyhow::Result;

use crate::ops::report::Plan;
use crate::util::fs::files_with_suffix;

/// Plan the en -> eng renames for one content directory.
pub fn plan_lang_subs(root: &Path) -> Result<Plan> {
    tracing::info!("normalizing .en.srt subtitles under '{}'", root.display());

    let mut plan = Plan::new();

    for path in files_with_suffix(root, ".en.srt")? {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };

        // Numbered pair tracks belong to the forced-repair pass.
        if name.ends_with(".1.en.srt") || name.ends_with(".2.en.srt") {
            continue;
        }

        let stem = match name.strip_suffix(".en.srt") {
            Some(stem) if !stem.is_empty() => stem,
            _ => continue,
        };

        tracing::debug!("found '.en.srt' subtitle: '{}'", path.display());
        let target = path.with_file_name(format!("{stem}.eng.srt"));

        if target.exists() {
            tracing::info!(
                "'.eng.srt' twin exists at '{}'; deleting '{}'",
                target.display(),
                path.display()
            );
            plan.delete(path);
        } else {
            plan.rename(path, target);
        }
    }

    Ok(plan)
}
