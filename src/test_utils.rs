//! Test utilities: an in-memory namespace and temporary directories.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Error, Result};
use crate::listing::{DirectoryLister, Entry, ListRequest, select_page};
use crate::location::{join_child, split_dir_and_name};

/// An in-memory namespace that records every page request it serves.
///
/// Paths are absolute namespace paths; parent directories are created as needed.
#[derive(Debug)]
pub struct MemoryLister {
    dirs: BTreeMap<String, BTreeMap<String, bool>>,
    failing: BTreeSet<String>,
    requests: RefCell<Vec<ListRequest>>,
}

impl MemoryLister {
    /// Create a namespace holding only an empty root.
    pub fn new() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert("/".to_string(), BTreeMap::new());
        Self {
            dirs,
            failing: BTreeSet::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.insert(path, false);
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert(path, true);
        self
    }

    /// Add `count` files named `f0000`, `f0001`, ... under `dir`.
    pub fn with_numbered_files(mut self, dir: &str, count: usize) -> Self {
        self.ensure_dir(dir);
        for i in 0..count {
            self.insert(&join_child(dir, &format!("f{i:04}")), false);
        }
        self
    }

    /// Make every listing of `dir` fail.
    pub fn failing_at(mut self, dir: &str) -> Self {
        self.failing.insert(dir.to_string());
        self
    }

    /// All requests served so far, in order.
    pub fn requests(&self) -> Vec<ListRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests made for one directory.
    pub fn request_count(&self, dir: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.directory == dir)
            .count()
    }

    fn insert(&mut self, path: &str, is_dir: bool) {
        let (parent, name) = split_dir_and_name(path).expect("Test paths must be absolute");
        self.ensure_dir(&parent);
        self.dirs
            .entry(parent)
            .or_default()
            .entry(name)
            .or_insert(is_dir);
        if is_dir {
            self.dirs.entry(path.to_string()).or_default();
        }
    }

    fn ensure_dir(&mut self, path: &str) {
        if self.dirs.contains_key(path) {
            return;
        }
        self.insert(path, true);
    }
}

impl Default for MemoryLister {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryLister for MemoryLister {
    fn list_entries(&self, request: &ListRequest) -> Result<Vec<Entry>> {
        self.requests.borrow_mut().push(request.clone());

        if self.failing.contains(&request.directory) {
            return Err(Error::transport(&request.directory, "injected failure"));
        }
        let children = self
            .dirs
            .get(&request.directory)
            .ok_or_else(|| Error::transport(&request.directory, "no such directory"))?;

        let sorted = children.iter().map(|(name, &is_directory)| Entry {
            name: name.clone(),
            is_directory,
        });
        Ok(select_page(sorted, request))
    }
}

/// A temporary directory for testing the local lister and the CLI.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
