//! Directory tree walking logic
//!
//! The walker streams a tree out of a namespace it can only read one page of
//! one directory at a time:
//!
//! - `prefix`: connector state shared across the whole walk
//! - `traversal`: paged depth-first descent
//! - `streaming`: the sink lines are written to

mod config;
mod prefix;
mod streaming;
mod traversal;

pub use config::{DEFAULT_PAGE_SIZE, WalkerConfig};
pub use prefix::{BLANK_SEGMENT, BRANCH, LAST_BRANCH, PIPE_SEGMENT, PrefixState};
pub use streaming::{StreamingOutput, WalkStats};
pub use traversal::{Traverser, walk, walk_with_config};
