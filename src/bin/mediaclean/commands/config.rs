//! `mediaclean config` command
//!
//! Prints the effective configuration as TOML, with the source path (or
//! lack of one) as a leading comment.

use anyhow::{Context, Result};

use mediaclean::util::GlobalContext;

pub fn execute(ctx: &GlobalContext) -> Result<()> {
    let config = ctx.load_config()?;

    match ctx.config_path() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config file location available"),
    }

    let rendered =
        toml::to_string_pretty(&config).context("failed to serialize configuration")?;
    print!("{rendered}");

    Ok(())
}
