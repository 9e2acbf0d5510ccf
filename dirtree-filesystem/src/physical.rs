use std::fs;

use anyhow::{Context, Result};
use camino::Utf8Path;

use super::{DirEntry, EntryKind, Filesystem};

/// Access to a real file system
#[derive(Debug, Default)]
pub struct DiskFilesystem;

impl DiskFilesystem {
    /// Constructs a handle to the real file system
    pub fn new() -> Self {
        DiskFilesystem
    }
}

impl Filesystem for DiskFilesystem {
    fn create_directory(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir(path).with_context(|| format!("Creating directory: {path}"))
    }

    fn create_directory_all(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir_all(path).with_context(|| format!("Creating directory: {path}"))
    }

    fn create_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let path = path.as_ref();
        // Opening for append creates the file if needed, and never truncates an existing one
        fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map(drop)
            .with_context(|| format!("Creating file: {path}"))
    }

    fn write_file(&mut self, path: impl AsRef<Utf8Path>, content: &str) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, content).with_context(|| format!("Writing file: {path}"))
    }

    fn is_directory(&self, path: impl AsRef<Utf8Path>) -> bool {
        fs::metadata(path.as_ref())
            .map(|m| m.file_type().is_dir())
            .unwrap_or(false)
    }

    fn is_file(&self, path: impl AsRef<Utf8Path>) -> bool {
        fs::metadata(path.as_ref())
            .map(|m| m.file_type().is_file())
            .unwrap_or(false)
    }

    fn list_directory(&self, path: impl AsRef<Utf8Path>) -> Result<Vec<DirEntry>> {
        let path = path.as_ref();
        let context = || format!("Listing directory: {path}");
        let mut listing = Vec::new();
        for entry in fs::read_dir(path).with_context(context)? {
            let entry = entry.with_context(context)?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    tracing::warn!("Skipping non-UTF-8 name in {}: {:?}", path, name);
                    continue;
                }
            };
            // Symlinks are followed, and anything unreadable is listed as a file
            let kind = match fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            };
            listing.push(DirEntry { name, kind });
        }
        Ok(listing)
    }

    fn read_file(&self, path: impl AsRef<Utf8Path>) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).with_context(|| format!("Reading file: {path}"))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use camino::Utf8PathBuf;

    use super::*;

    fn temp_root() -> Result<(tempfile::TempDir, Utf8PathBuf)> {
        let dir = tempfile::tempdir()?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_owned())
            .map_err(|path| anyhow::anyhow!("Non UTF-8 temporary path: {}", path.display()))?;
        Ok((dir, root))
    }

    #[test]
    fn create_file_keeps_content() -> Result<()> {
        let (_dir, root) = temp_root()?;
        let mut fs = DiskFilesystem::new();
        let file = root.join("file.txt");
        fs.write_file(&file, "CONTENT")?;
        fs.create_file(&file)?;
        assert_eq!(fs.read_file(&file)?, "CONTENT");
        Ok(())
    }

    #[test]
    fn create_directory_all_is_idempotent() -> Result<()> {
        let (_dir, root) = temp_root()?;
        let mut fs = DiskFilesystem::new();
        let deep = root.join("a").join("b");
        fs.create_directory_all(&deep)?;
        fs.create_directory_all(&deep)?;
        assert!(fs.is_directory(&deep));
        assert!(fs.create_directory(&deep).is_err());
        Ok(())
    }

    #[test]
    fn list_directory_with_kinds() -> Result<()> {
        let (_dir, root) = temp_root()?;
        let mut fs = DiskFilesystem::new();
        fs.create_directory(root.join("sub"))?;
        fs.create_file(root.join("file"))?;
        let mut listing = fs.list_directory(&root)?;
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            listing,
            vec![
                DirEntry {
                    name: "file".into(),
                    kind: EntryKind::File
                },
                DirEntry {
                    name: "sub".into(),
                    kind: EntryKind::Directory
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn io_errors_keep_their_kind() {
        let fs = DiskFilesystem::new();
        let err = fs
            .read_file("/nonexistent/dirtree/file")
            .expect_err("Read of missing file");
        let io = err
            .downcast_ref::<std::io::Error>()
            .expect("Underlying I/O error");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }
}
