use anyhow::Result;
use camino::Utf8Path;

use dirtree_filesystem::{DirEntry, Filesystem, PlantedPath};
use dirtree_listing::{render_listing, Column, Connector, EntryKind, TreeLine};

use crate::{IgnoreRules, TraversalError};

/// Settings controlling which parts of a directory tree are listed
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Directories to leave out, along with everything beneath them
    pub ignore: IgnoreRules,
    /// The deepest level of entries to list, or unlimited if `None`
    ///
    /// A negative depth lists nothing, and a depth of zero lists only the root.
    pub max_depth: Option<i32>,
}

/// Lists the directory tree at `root` as lines of a listing
///
/// Entries of each directory are given directories first, then in case-insensitive order of
/// name. Only directories are ever ignored.
pub fn encode<FS>(
    root: impl AsRef<Utf8Path>,
    options: &ExportOptions,
    filesystem: &FS,
) -> Result<Vec<TreeLine>>
where
    FS: Filesystem,
{
    let root = root.as_ref();
    if !filesystem.is_directory(root) {
        return Err(TraversalError::InvalidRoot(root.to_owned()).into());
    }
    let name = root
        .file_name()
        .ok_or_else(|| TraversalError::InvalidRoot(root.to_owned()))?;

    let mut lines = vec![];
    if options.max_depth.map_or(false, |max| max < 0) {
        tracing::debug!("Negative depth, nothing to list");
        return Ok(lines);
    }
    lines.push(TreeLine::root(name));
    if options.max_depth.map_or(true, |max| max > 0) {
        encode_directory(&PlantedPath::new(root), &[], 0, options, filesystem, &mut lines)?;
    }
    Ok(lines)
}

fn encode_directory<FS>(
    path: &PlantedPath,
    prefix: &[Column],
    depth: i32,
    options: &ExportOptions,
    filesystem: &FS,
    lines: &mut Vec<TreeLine>,
) -> Result<()>
where
    FS: Filesystem,
{
    if options.max_depth.map_or(false, |max| depth > max) {
        return Ok(());
    }
    tracing::debug!("Listing {}", path);

    let mut entries = vec![];
    for entry in filesystem.list_directory(path.absolute())? {
        let child = path.join(&entry.name)?;
        if entry.kind == EntryKind::Directory && options.ignore.matches(&entry.name, &child.relative())
        {
            tracing::info!("Ignoring directory: {}", child.relative());
            continue;
        }
        entries.push((entry, child));
    }
    entries.sort_by(|(a, _), (b, _)| compare_entries(a, b));

    let count = entries.len();
    for (index, (entry, child)) in entries.into_iter().enumerate() {
        let connector = Connector::for_position(index + 1 == count);
        let line = TreeLine::entry(prefix.to_vec(), connector, entry.name, entry.kind);
        let child_prefix = line.child_prefix();
        let is_directory = line.is_directory();
        tracing::trace!("{}", line);
        lines.push(line);
        if is_directory {
            encode_directory(&child, &child_prefix, depth + 1, options, filesystem, lines)?;
        }
    }
    Ok(())
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> std::cmp::Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Lists the directory tree at `root` and writes the listing to `output`
///
/// Returns the number of lines written.
pub fn export<FS>(
    root: impl AsRef<Utf8Path>,
    output: impl AsRef<Utf8Path>,
    options: &ExportOptions,
    filesystem: &mut FS,
) -> Result<usize>
where
    FS: Filesystem,
{
    let (root, output) = (root.as_ref(), output.as_ref());
    tracing::info!("Exporting from root: {}", root);
    let lines = encode(root, options, &*filesystem)?;
    filesystem.write_file(output, &render_listing(&lines))?;
    tracing::info!("Structure exported to: {} ({} lines)", output, lines.len());
    Ok(lines.len())
}
