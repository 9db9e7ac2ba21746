//! Command implementations

pub mod completions;
pub mod config;
pub mod junk;
pub mod prune;
pub mod run;
pub mod subs;

use anyhow::Result;
use mediaclean::ops::{format_report, CleanReport};

/// Print a report as text or JSON.
pub(crate) fn print_report(report: &CleanReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", format_report(report));
    }
    Ok(())
}
