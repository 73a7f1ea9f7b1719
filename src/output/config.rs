//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print a `N directories, M files` line after the tree.
    pub show_summary: bool,
}

impl OutputConfig {
    /// Exact lines only: no color, no summary.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            show_summary: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_summary: false,
        }
    }
}
