//! Connector prefixes for streamed tree lines
//!
//! A walk that only sees one page at a time cannot precompute each line's
//! prefix from its parent's. Instead a single [`PrefixState`] remembers, per
//! depth, whether that level still has siblings to come. It is shared by the
//! whole walk and mutated in exactly the order lines are printed.

use std::collections::BTreeSet;

pub const BRANCH: &str = "├──";
pub const LAST_BRANCH: &str = "└──";
pub const PIPE_SEGMENT: &str = "│   ";
pub const BLANK_SEGMENT: &str = "    ";

/// Depths that still have entries waiting below the current line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrefixState {
    markers: BTreeSet<usize>,
}

impl PrefixState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `depth` has at least one more entry to print.
    pub fn mark(&mut self, depth: usize) {
        self.markers.insert(depth);
    }

    pub fn clear(&mut self, depth: usize) {
        self.markers.remove(&depth);
    }

    pub fn is_marked(&self, depth: usize) -> bool {
        self.markers.contains(&depth)
    }

    /// Build the prefix for an entry at `depth`.
    ///
    /// Rendering the last entry of a level clears that level's marker, so
    /// deeper lines printed afterwards get a blank segment for it.
    pub fn render(&mut self, depth: usize, is_last: bool) -> String {
        let mut prefix = String::with_capacity((depth + 1) * PIPE_SEGMENT.len());
        for level in 0..depth {
            if self.is_marked(level) {
                prefix.push_str(PIPE_SEGMENT);
            } else {
                prefix.push_str(BLANK_SEGMENT);
            }
        }
        if is_last {
            prefix.push_str(LAST_BRANCH);
            self.clear(depth);
        } else {
            prefix.push_str(BRANCH);
        }
        prefix
    }
}
