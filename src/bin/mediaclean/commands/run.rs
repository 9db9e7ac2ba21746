//! `mediaclean run` command

use anyhow::Result;

use mediaclean::ops::{clean_all, CleanOptions};
use mediaclean::util::GlobalContext;

use crate::cli::RunArgs;
use crate::commands::print_report;

pub fn execute(ctx: &GlobalContext, args: RunArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let dirs = ctx.resolve_dirs(&args.dirs, &config)?;

    let opts = CleanOptions {
        subs: true,
        junk: true,
        prune: config.clean.prune_empty_dirs,
        dry_run: args.dry_run,
        junk_filter: config.junk_filter(),
        junk_patterns: config.clean.junk_patterns.clone(),
    };

    let report = clean_all(&dirs, &opts)?;
    print_report(&report, args.json)
}
