//! `mediaclean subs` command

use anyhow::Result;

use mediaclean::ops::{clean_all, CleanOptions};
use mediaclean::util::GlobalContext;

use crate::cli::SubsArgs;
use crate::commands::print_report;

pub fn execute(ctx: &GlobalContext, args: SubsArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let dirs = ctx.resolve_dirs(&args.dirs, &config)?;

    let opts = CleanOptions {
        subs: true,
        junk: false,
        prune: false,
        dry_run: args.dry_run,
        ..Default::default()
    };

    let report = clean_all(&dirs, &opts)?;
    print_report(&report, args.json)
}
