//! Provides an abstract [`Filesystem`] trait, together with a physical ([`DiskFilesystem`])
//! and virtual ([`MemoryFilesystem`]) implementation.
#![warn(missing_docs)]

use std::fmt::Display;

use anyhow::{bail, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

mod memory;
mod physical;

pub use dirtree_listing::EntryKind;

pub use self::{memory::MemoryFilesystem, physical::DiskFilesystem};

/// A named child of a directory, as returned by [`Filesystem::list_directory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// The bare name of the entry
    pub name: String,
    /// Whether the entry is a directory or a file (anything that is not a directory)
    pub kind: EntryKind,
}

/// Operations of a file system
pub trait Filesystem {
    /// Create a directory at the given path, whose parent must already exist
    fn create_directory(&mut self, path: impl AsRef<Utf8Path>) -> Result<()>;

    /// Create a directory and all of its parents
    ///
    /// Directories that already exist are left as they are.
    fn create_directory_all(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some((parent, _)) = split(path) {
            if parent.parent().is_some() {
                self.create_directory_all(parent)?;
            }
        }
        if !self.is_directory(path) {
            self.create_directory(path)?;
        }
        Ok(())
    }

    /// Create an empty file at the given path, if no file exists there already
    ///
    /// The content of an existing file is preserved.
    fn create_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<()>;

    /// Write the given content to a file, replacing the file if it exists
    fn write_file(&mut self, path: impl AsRef<Utf8Path>, content: &str) -> Result<()>;

    /// Returns true if the path is a directory
    fn is_directory(&self, path: impl AsRef<Utf8Path>) -> bool;

    /// Returns true if the path is a regular file
    fn is_file(&self, path: impl AsRef<Utf8Path>) -> bool;

    /// Lists the contents of the given directory, in no particular order
    fn list_directory(&self, path: impl AsRef<Utf8Path>) -> Result<Vec<DirEntry>>;

    /// Reads the contents of the given file
    fn read_file(&self, path: impl AsRef<Utf8Path>) -> Result<String>;
}

/// Splits the dirname and basename of the path if possible to do so
pub fn split(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => Some((parent, name)),
        _ => None,
    }
}

/// An absolute path that can be split easily into its root and relative path parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantedPath {
    root_len: usize,
    full: Utf8PathBuf,
}

impl PlantedPath {
    /// Creates a planted path at the given root
    pub fn new(root: impl AsRef<Utf8Path>) -> Self {
        let root = root.as_ref();
        PlantedPath {
            root_len: root.as_str().len(),
            full: root.to_owned(),
        }
    }

    /// The full path
    pub fn absolute(&self) -> &Utf8Path {
        &self.full
    }

    /// The path relative to the root, always using `/` as the separator
    pub fn relative(&self) -> String {
        let relative = Utf8Path::new(&self.full.as_str()[self.root_len..]);
        let mut joined = String::with_capacity(relative.as_str().len());
        for part in relative.components() {
            if let Utf8Component::Normal(part) = part {
                if !joined.is_empty() {
                    joined.push('/');
                }
                joined.push_str(part);
            }
        }
        joined
    }

    /// Produces a new planted path with the given path part appended
    pub fn join(&self, name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            bail!(
                "Only single path components can be joined to a planted path: {}",
                name
            );
        }
        Ok(PlantedPath {
            root_len: self.root_len,
            full: self.full.join(name),
        })
    }
}

impl Display for PlantedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn check_relative() -> Result<()> {
        let root = PlantedPath::new("/example");
        assert_eq!(root.relative(), "");
        let path = root.join("path")?.join("deeper")?;
        assert_eq!(path.absolute().as_str(), "/example/path/deeper");
        assert_eq!(path.relative(), "path/deeper");
        Ok(())
    }

    #[test]
    fn join_rejects_nested_names() {
        let root = PlantedPath::new("/example");
        assert!(root.join("a/b").is_err());
    }

    #[test]
    fn create_directory_all() -> Result<()> {
        let mut fs = MemoryFilesystem::new();
        fs.create_directory_all("/a/b/c")?;
        assert!(fs.is_directory("/a"));
        assert!(fs.is_directory("/a/b"));
        assert!(fs.is_directory("/a/b/c"));
        // Again, without error
        fs.create_directory_all("/a/b/c")?;
        Ok(())
    }

    #[test]
    fn split_path() {
        assert_eq!(
            split(Utf8Path::new("/a/b")),
            Some((Utf8Path::new("/a"), "b"))
        );
        assert_eq!(split(Utf8Path::new("/")), None);
    }
}
