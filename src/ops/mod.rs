//! High-level operations.
//!
//! This module contains the implementation of Mediaclean commands. Each
//! pass plans its actions first and mutates the filesystem only when the
//! plan is applied.

pub mod clean;
pub mod empty_dirs;
pub mod forced_subs;
pub mod junk;
pub mod lang_subs;
pub mod report;

pub use clean::{clean_all, clean_dir, CleanOptions};
pub use empty_dirs::plan_empty_dirs;
pub use forced_subs::plan_forced_subs;
pub use junk::plan_junk;
pub use lang_subs::plan_lang_subs;
pub use report::{format_report, Action, CleanReport, DirReport, Plan, Skip};
