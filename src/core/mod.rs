//! Core domain types.

pub mod junk;
pub mod subtitle;

pub use junk::JunkFilter;
pub use subtitle::{ForcedVerdict, SubtitleFile};
