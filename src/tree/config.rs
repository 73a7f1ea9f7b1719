//! Configuration types for the tree walker

/// Page size used when none is given, matching the filer's listing default.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Entries requested per listing call.
    pub page_size: usize,
    /// Descend only this many levels; directories beyond are printed but not listed.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    /// The page size as a request limit, if it is usable.
    pub fn limit(&self) -> Option<u32> {
        u32::try_from(self.page_size).ok().filter(|&n| n > 0)
    }

    pub(crate) fn descends_below(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth + 1 < max)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_depth: None,
        }
    }
}
