//! Domain types - pure data independent of file handling

pub mod anchor;
pub mod record;

pub use anchor::{Anchor, RewriteMode, VersionTag};
pub use record::Record;
