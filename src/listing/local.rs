//! LocalLister - a directory on this machine served as a namespace

use std::path::{Component, Path, PathBuf};

use tracing::{trace, warn};

use crate::error::{Error, Result};

use super::{DirectoryLister, Entry, ListRequest, select_page};

/// Serves `root` as a namespace: `/x/y` maps to `<root>/x/y`.
///
/// Symlinks are listed as plain entries and never descended into. Names that
/// are not valid UTF-8 are listed lossily as plain entries too, since the lossy
/// name cannot be resolved back to the real directory.
///
/// Every page request re-reads and re-sorts the whole directory.
#[derive(Debug, Clone)]
pub struct LocalLister {
    root: PathBuf,
}

impl LocalLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, directory: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        for component in Path::new(directory.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => return Err(Error::transport(directory, "path escapes the served root")),
            }
        }
        Ok(path)
    }

    fn read_sorted(&self, directory: &str) -> Result<Vec<Entry>> {
        let path = self.resolve(directory)?;
        let read_dir =
            std::fs::read_dir(&path).map_err(|e| Error::transport(directory, e.to_string()))?;

        let mut entries: Vec<Entry> = read_dir
            .filter_map(|e| e.ok())
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                match e.file_name().into_string() {
                    Ok(name) => Entry {
                        name,
                        is_directory: is_dir,
                    },
                    Err(raw) => {
                        let name = raw.to_string_lossy().to_string();
                        warn!(directory, name = %name, "name is not valid UTF-8, not descending");
                        Entry::file(name)
                    }
                }
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

impl DirectoryLister for LocalLister {
    fn list_entries(&self, request: &ListRequest) -> Result<Vec<Entry>> {
        let entries = self.read_sorted(&request.directory)?;
        trace!(directory = %request.directory, total = entries.len(), "read local directory");
        Ok(select_page(entries, request))
    }
}
