//! Depth-first, page-at-a-time traversal of a listed namespace.
//!
//! Each directory is read with as many list calls as it takes: a full page
//! means more may follow, a short (or empty) page means the directory is done.
//! Sub-directories are walked as soon as they are printed, before the rest of
//! the page, so lines come out in pre-order.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::listing::{DirectoryLister, ListRequest};
use crate::location::join_child;

use super::config::WalkerConfig;
use super::prefix::PrefixState;
use super::streaming::{StreamingOutput, WalkStats};

/// Walk `start_directory` and stream one line per entry into `output`.
///
/// `start_name_filter` restricts the first page request only, so that a
/// single named entry (and everything below it) can be shown.
pub fn walk<L, O>(
    client: &L,
    start_directory: &str,
    start_name_filter: &str,
    page_size: usize,
    output: &mut O,
) -> Result<WalkStats>
where
    L: DirectoryLister + ?Sized,
    O: StreamingOutput,
{
    let config = WalkerConfig {
        page_size,
        ..Default::default()
    };
    walk_with_config(client, start_directory, start_name_filter, &config, output)
}

/// Like [`walk`], with every walker option available.
pub fn walk_with_config<L, O>(
    client: &L,
    start_directory: &str,
    start_name_filter: &str,
    config: &WalkerConfig,
    output: &mut O,
) -> Result<WalkStats>
where
    L: DirectoryLister + ?Sized,
    O: StreamingOutput,
{
    let limit = config.limit().ok_or(Error::InvalidPageSize)?;
    if !start_directory.starts_with('/') {
        return Err(Error::InvalidPath(start_directory.to_string()));
    }

    let mut traverser = Traverser::new(client, &mut *output, config, limit);
    traverser.traverse(start_directory, start_name_filter, 0)?;
    let stats = traverser.stats();

    debug!(
        directories = stats.directories,
        files = stats.files,
        requests = stats.requests,
        "walk finished"
    );
    output.finish(&stats)?;
    Ok(stats)
}

/// State of one walk: the shared prefix markers plus running counts.
pub struct Traverser<'a, L: ?Sized, O> {
    lister: &'a L,
    output: O,
    config: &'a WalkerConfig,
    limit: u32,
    prefix: PrefixState,
    stats: WalkStats,
}

impl<'a, L, O> Traverser<'a, L, O>
where
    L: DirectoryLister + ?Sized,
    O: StreamingOutput,
{
    pub fn new(lister: &'a L, output: O, config: &'a WalkerConfig, limit: u32) -> Self {
        Self {
            lister,
            output,
            config,
            limit,
            prefix: PrefixState::new(),
            stats: WalkStats::default(),
        }
    }

    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    /// List `directory` page by page at `depth`, recursing into sub-directories.
    ///
    /// Only a short page tells us which entry is last. When a directory holds an
    /// exact multiple of the page size, its real last entry arrives on a full page
    /// and is drawn with a `├──` connector; the empty page that follows has
    /// nothing left to mark as last.
    pub fn traverse(&mut self, directory: &str, name_filter: &str, depth: usize) -> Result<()> {
        let page_size = self.limit as usize;
        let mut cursor = String::new();
        let mut last_page_count: Option<usize> = None;

        while last_page_count.is_none_or(|count| count == page_size) {
            let request = ListRequest::new(directory, self.limit)
                .with_prefix(name_filter)
                .starting_after(cursor.as_str());
            let entries = self.lister.list_entries(&request)?;
            self.stats.requests += 1;

            let count = entries.len();
            debug!(directory, depth, cursor = %cursor, count, "listed page");
            last_page_count = Some(count);
            if count > 0 {
                self.prefix.mark(depth);
            }

            for (i, entry) in entries.into_iter().enumerate() {
                let is_last = count < page_size && i == count - 1;
                let line_prefix = self.prefix.render(depth, is_last);
                trace!(name = %entry.name, depth, is_last, "entry");
                self.output
                    .output_entry(&line_prefix, &entry.name, entry.is_directory)?;

                if entry.is_directory {
                    self.stats.directories += 1;
                    let child = join_child(directory, &entry.name);
                    if self.config.descends_below(depth) {
                        self.traverse(&child, "", depth + 1)?;
                    } else {
                        debug!(directory = %child, depth, "depth limit reached, not listing");
                    }
                } else {
                    self.stats.files += 1;
                }
                cursor = entry.name;
            }
        }
        Ok(())
    }
}
