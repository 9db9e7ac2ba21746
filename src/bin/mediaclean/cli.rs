//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Mediaclean - cleaning for NAS media library folders
#[derive(Parser)]
#[command(name = "mediaclean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(long, global = true, env = "MEDIACLEAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every cleaning pass: subtitles, junk files, empty directories
    Run(RunArgs),

    /// Repair forced-subtitle pairs and normalize .en.srt to .eng.srt
    Subs(SubsArgs),

    /// Delete junk files (.nfo and .txt by default)
    Junk(JunkArgs),

    /// Remove empty directories
    Prune(PruneArgs),

    /// Print the effective configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Content directories to clean (defaults to configured content_dirs)
    pub dirs: Vec<PathBuf>,

    /// Plan actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SubsArgs {
    /// Content directories to clean (defaults to configured content_dirs)
    pub dirs: Vec<PathBuf>,

    /// Plan actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct JunkArgs {
    /// Content directories to clean (defaults to configured content_dirs)
    pub dirs: Vec<PathBuf>,

    /// Junk extensions to delete (overrides the configured set)
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Extra glob patterns to delete, relative to each directory
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,

    /// Plan actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PruneArgs {
    /// Content directories to clean (defaults to configured content_dirs)
    pub dirs: Vec<PathBuf>,

    /// Plan actions without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
