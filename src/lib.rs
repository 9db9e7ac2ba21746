//! Mediaclean - a CLI for cleaning NAS media library folders
//!
//! This crate provides the core library functionality for Mediaclean,
//! including subtitle filename repair, junk-file removal, and
//! empty-directory pruning across configured content directories.

pub mod core;
pub mod ops;
pub mod util;

pub use core::{
    junk::JunkFilter,
    subtitle::{ForcedVerdict, SubtitleFile},
};

pub use ops::{clean_all, clean_dir, CleanOptions, CleanReport};
pub use util::config::Config;
pub use util::context::GlobalContext;
