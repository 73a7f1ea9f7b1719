//! Pagetree - `tree` for directory services that list one page at a time

pub mod error;
pub mod listing;
pub mod location;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use listing::{DirectoryLister, Entry, FilerClient, ListRequest, LocalLister};
pub use location::{Backend, Location};
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{StreamingOutput, WalkStats, WalkerConfig, walk, walk_with_config};
