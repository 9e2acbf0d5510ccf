use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use super::{DirEntry, EntryKind, Filesystem};

/// An in-memory representation of a file system
#[derive(Debug)]
pub struct MemoryFilesystem {
    map: HashMap<Utf8PathBuf, Node>,
}

#[derive(Debug)]
enum Node {
    File { content: String },
    Directory { children: Vec<String> },
}

impl MemoryFilesystem {
    /// Constructs a new, empty filesystem containing only the root directory (`/`)
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("/".into(), Node::Directory { children: vec![] });
        MemoryFilesystem { map }
    }

    /// Returns the set of every path in the filesystem, including `/`
    pub fn to_path_set(&self) -> HashSet<String> {
        self.map.keys().map(|path| path.as_str().to_owned()).collect()
    }

    /// Inserts a new entry into the filesystem
    ///
    /// # Arguments
    ///
    /// * `path` - An absolute path whose parent is an existing directory
    /// * `node` - The entry itself
    ///
    fn insert_node(&mut self, path: &Utf8Path, node: Node) -> Result<()> {
        if !path.is_absolute() {
            return Err(anyhow!("Only absolute paths supported: {}", path));
        }
        let (parent, name) =
            super::split(path).ok_or_else(|| anyhow!("Cannot create {}", path))?;
        // Check it doesn't already exist
        if self.map.contains_key(path) {
            return Err(anyhow!("File exists: {}", path));
        }
        let parent_node = self
            .map
            .get_mut(parent)
            .ok_or_else(|| anyhow!("Parent directory not found: {}", parent))?;
        // Insert name into parent
        match parent_node {
            Node::Directory { ref mut children } => children.push(name.into()),
            Node::File { .. } => return Err(anyhow!("Parent not a directory: {}", parent)),
        }
        // Insert full path and node into map
        self.map.insert(path.to_owned(), node);
        Ok(())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_directory(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        self.insert_node(path, Node::Directory { children: vec![] })
            .with_context(|| format!("Creating directory: {path}"))
    }

    fn create_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        if self.is_file(path) {
            return Ok(());
        }
        self.insert_node(
            path,
            Node::File {
                content: String::new(),
            },
        )
        .with_context(|| format!("Creating file: {path}"))
    }

    fn write_file(&mut self, path: impl AsRef<Utf8Path>, content: &str) -> Result<()> {
        let path = path.as_ref();
        match self.map.get_mut(path) {
            Some(Node::File { content: existing }) => {
                *existing = content.to_owned();
                Ok(())
            }
            _ => self
                .insert_node(
                    path,
                    Node::File {
                        content: content.to_owned(),
                    },
                )
                .with_context(|| format!("Writing file: {path}")),
        }
    }

    fn is_directory(&self, path: impl AsRef<Utf8Path>) -> bool {
        matches!(self.map.get(path.as_ref()), Some(Node::Directory { .. }))
    }

    fn is_file(&self, path: impl AsRef<Utf8Path>) -> bool {
        matches!(self.map.get(path.as_ref()), Some(Node::File { .. }))
    }

    fn list_directory(&self, path: impl AsRef<Utf8Path>) -> Result<Vec<DirEntry>> {
        let path = path.as_ref();
        match self.map.get(path) {
            None => Err(anyhow!("No such file or directory: {}", path)),
            Some(Node::Directory { children }) => Ok(children
                .iter()
                .map(|name| DirEntry {
                    name: name.clone(),
                    kind: if self.is_directory(path.join(name)) {
                        EntryKind::Directory
                    } else {
                        EntryKind::File
                    },
                })
                .collect()),
            Some(Node::File { .. }) => Err(anyhow!("Tried to list directory of a file")),
        }
        .with_context(|| format!("Listing directory: {path}"))
    }

    fn read_file(&self, path: impl AsRef<Utf8Path>) -> Result<String> {
        let path = path.as_ref();
        match self.map.get(path) {
            None => Err(anyhow!("No such file or directory: {}", path)),
            Some(Node::File { content }) => Ok(content.clone()),
            Some(Node::Directory { .. }) => Err(anyhow!("Tried to read a directory: {}", path)),
        }
    }
}
