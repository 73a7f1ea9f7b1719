//! Directory listing service
//!
//! The walker only ever talks to a namespace through [`DirectoryLister`]: one
//! call returns one ordered page of the entries directly under a directory.
//!
//! - `local` - serves a directory on this machine as a namespace
//! - `filer` - talks to a filer over HTTP

mod filer;
mod local;

use crate::error::Result;

pub use filer::FilerClient;
pub use local::LocalLister;

/// One item directly under a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_directory: bool,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// Parameters of a single page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub directory: String,
    /// Only names starting with this are returned. Empty matches everything.
    pub name_prefix: String,
    /// Cursor: the last name seen on the previous page. Empty starts at the beginning.
    pub start_after: String,
    pub inclusive_start: bool,
    pub limit: u32,
}

impl ListRequest {
    pub fn new(directory: impl Into<String>, limit: u32) -> Self {
        Self {
            directory: directory.into(),
            name_prefix: String::new(),
            start_after: String::new(),
            inclusive_start: false,
            limit,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.start_after = cursor.into();
        self
    }

    /// Check whether a name belongs on the page described by this request.
    pub fn admits(&self, name: &str) -> bool {
        if !name.starts_with(&self.name_prefix) {
            return false;
        }
        if self.start_after.is_empty() {
            return true;
        }
        if self.inclusive_start {
            name >= self.start_after.as_str()
        } else {
            name > self.start_after.as_str()
        }
    }
}

/// A paged directory listing service.
///
/// Implementations return at most `request.limit` entries, sorted by name,
/// every one of them admitted by [`ListRequest::admits`].
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryLister {
    fn list_entries(&self, request: &ListRequest) -> Result<Vec<Entry>>;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list_entries(&self, request: &ListRequest) -> Result<Vec<Entry>> {
        (**self).list_entries(request)
    }
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for Box<T> {
    fn list_entries(&self, request: &ListRequest) -> Result<Vec<Entry>> {
        (**self).list_entries(request)
    }
}

/// Cut one page out of a full, name-sorted directory listing.
pub fn select_page<I>(sorted: I, request: &ListRequest) -> Vec<Entry>
where
    I: IntoIterator<Item = Entry>,
{
    sorted
        .into_iter()
        .filter(|entry| request.admits(&entry.name))
        .take(request.limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn listing() -> Vec<Entry> {
        vec![
            Entry::file("a"),
            Entry::dir("b"),
            Entry::file("ba"),
            Entry::file("c"),
            Entry::file("d"),
        ]
    }

    #[test]
    fn test_select_page_respects_limit() {
        let page = select_page(listing(), &ListRequest::new("/", 2));
        assert_eq!(names(&page), vec!["a", "b"]);
    }

    #[test]
    fn test_select_page_cursor_is_exclusive() {
        let request = ListRequest::new("/", 10).starting_after("b");
        assert_eq!(names(&select_page(listing(), &request)), vec!["ba", "c", "d"]);
    }

    #[test]
    fn test_select_page_inclusive_start() {
        let mut request = ListRequest::new("/", 2).starting_after("c");
        request.inclusive_start = true;
        assert_eq!(names(&select_page(listing(), &request)), vec!["c", "d"]);
    }

    #[test]
    fn test_select_page_prefix() {
        let request = ListRequest::new("/", 10).with_prefix("b");
        assert_eq!(names(&select_page(listing(), &request)), vec!["b", "ba"]);
    }

    #[test]
    fn test_select_page_past_end_is_empty() {
        let request = ListRequest::new("/", 10).starting_after("d");
        assert!(select_page(listing(), &request).is_empty());
    }
}
