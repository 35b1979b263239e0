//! Filesystem access for thermal zone entries
//!
//! [`ZoneSource`] is the seam between the reader and the filesystem. The default
//! [`SysfsSource`] talks to `std::fs` directly; tests substitute a mock.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Access to the entries and value files of a sensor root
#[cfg_attr(test, automock)]
pub trait ZoneSource: Send + Sync + std::fmt::Debug {
    /// List the full paths of every entry directly under `root`, in no particular order
    fn list_entries(&self, root: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read the whole contents of a value file
    fn read_value(&self, path: &Path) -> io::Result<String>;
}

/// [`ZoneSource`] backed by the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsSource;

impl ZoneSource for SysfsSource {
    fn list_entries(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(root)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }

    fn read_value(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
