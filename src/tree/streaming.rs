//! The sink a walk streams its lines into

use std::io;

/// Counts gathered over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub directories: usize,
    pub files: usize,
    /// Listing calls issued, including the final short or empty page of each directory.
    pub requests: usize,
}

/// Callback for streaming output - receives each entry as soon as it is discovered.
pub trait StreamingOutput {
    /// Write one entry. `prefix` already holds the indentation and connector.
    fn output_entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()>;

    /// Called once after a walk that completed without error.
    fn finish(&mut self, stats: &WalkStats) -> io::Result<()>;
}

impl<O: StreamingOutput + ?Sized> StreamingOutput for &mut O {
    fn output_entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()> {
        (**self).output_entry(prefix, name, is_dir)
    }

    fn finish(&mut self, stats: &WalkStats) -> io::Result<()> {
        (**self).finish(stats)
    }
}
