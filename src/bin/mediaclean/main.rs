//! Mediaclean CLI - cleaning for NAS media library folders

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

use mediaclean::util::GlobalContext;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("mediaclean=debug")
    } else {
        EnvFilter::new("mediaclean=info")
    };

    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let ctx = GlobalContext::new()?.with_config_path(cli.config);

    // Execute command
    match cli.command {
        Commands::Run(args) => commands::run::execute(&ctx, args),
        Commands::Subs(args) => commands::subs::execute(&ctx, args),
        Commands::Junk(args) => commands::junk::execute(&ctx, args),
        Commands::Prune(args) => commands::prune::execute(&ctx, args),
        Commands::Config => commands::config::execute(&ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
