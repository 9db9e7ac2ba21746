//! `mediaclean junk` command

use anyhow::Result;

use mediaclean::ops::{clean_all, CleanOptions};
use mediaclean::util::GlobalContext;
use mediaclean::JunkFilter;

use crate::cli::JunkArgs;
use crate::commands::print_report;

pub fn execute(ctx: &GlobalContext, args: JunkArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let dirs = ctx.resolve_dirs(&args.dirs, &config)?;

    let junk_filter = if args.extensions.is_empty() {
        config.junk_filter()
    } else {
        JunkFilter::new(&args.extensions)
    };

    let mut junk_patterns = config.clean.junk_patterns.clone();
    junk_patterns.extend(args.patterns);

    let opts = CleanOptions {
        subs: false,
        junk: true,
        prune: false,
        dry_run: args.dry_run,
        junk_filter,
        junk_patterns,
    };

    let report = clean_all(&dirs, &opts)?;
    print_report(&report, args.json)
}
