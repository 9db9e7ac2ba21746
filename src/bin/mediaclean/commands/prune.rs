//! `mediaclean prune` command

use anyhow::Result;

use mediaclean::ops::{clean_all, CleanOptions};
use mediaclean::util::GlobalContext;

use crate::cli::PruneArgs;
use crate::commands::print_report;

pub fn execute(ctx: &GlobalContext, args: PruneArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let dirs = ctx.resolve_dirs(&args.dirs, &config)?;

    let opts = CleanOptions {
        subs: false,
        junk: false,
        prune: true,
        dry_run: args.dry_run,
        ..Default::default()
    };

    let report = clean_all(&dirs, &opts)?;
    print_report(&report, args.json)
}
