use anyhow::Result;
use camino::Utf8Path;

use dirtree_filesystem::Filesystem;
use dirtree_listing::{parse_listing, EntryKind};

use crate::{DirectoryStack, TraversalError};

/// Settings controlling how a listing is turned into a directory tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Leave out the root line, creating its entries directly in the destination
    pub strip_root: bool,
    /// Fail on the first malformed or unreachable line instead of skipping it
    pub strict: bool,
}

/// Counts of what a listing produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateSummary {
    /// Directory lines applied, including any that already existed
    pub directories: usize,
    /// File lines applied, including any that already existed
    pub files: usize,
    /// Lines that were malformed or could not be placed
    pub skipped: usize,
}

/// Reads the text of the listing file at `listing`
pub fn read_listing<FS>(listing: impl AsRef<Utf8Path>, filesystem: &FS) -> Result<String>
where
    FS: Filesystem,
{
    let listing = listing.as_ref();
    if !filesystem.is_file(listing) {
        return Err(TraversalError::InvalidListing(listing.to_owned()).into());
    }
    tracing::info!("Reading structure from: {}", listing);
    filesystem.read_file(listing)
}

/// Reads the listing at `listing` and creates the tree it describes beneath `destination`
pub fn create_from_file<FS>(
    listing: impl AsRef<Utf8Path>,
    destination: impl AsRef<Utf8Path>,
    options: &CreateOptions,
    filesystem: &mut FS,
) -> Result<CreateSummary>
where
    FS: Filesystem,
{
    let text = read_listing(listing, &*filesystem)?;
    create(&text, destination, options, filesystem)
}

/// Creates the tree described by the listing `text` beneath `destination`
///
/// Directories and files that already exist are left as they are, so the content of existing
/// files is never touched. A file line naming an existing directory (or a directory line naming
/// an existing file) is an error.
pub fn create<FS>(
    text: &str,
    destination: impl AsRef<Utf8Path>,
    options: &CreateOptions,
    filesystem: &mut FS,
) -> Result<CreateSummary>
where
    FS: Filesystem,
{
    let destination = destination.as_ref();
    tracing::info!("Creating structure in: {}", destination);
    let mut stack = DirectoryStack::new(destination);
    let mut summary = CreateSummary::default();

    for parsed in parse_listing(text) {
        let source = match parsed {
            Ok(source) => source,
            Err(error) => {
                if options.strict {
                    return Err(error.to_owned_error().into());
                }
                tracing::warn!("Skipping malformed line:\n{}", error);
                summary.skipped += 1;
                continue;
            }
        };
        let line = &source.tree_line;

        if line.is_root() {
            if options.strip_root {
                tracing::debug!("Leaving out root directory: {}", line.name());
            } else {
                let root = destination.join(line.name());
                filesystem.create_directory_all(&root)?;
                tracing::info!("Created root directory: {}", root);
                summary.directories += 1;
                stack.open_root(root);
            }
            continue;
        }

        let depth = line.depth();
        let parent = match stack.parent_for(depth) {
            Some(parent) => parent.to_owned(),
            None => {
                let error = TraversalError::UnreachableDepth {
                    line_number: source.line_number,
                    depth,
                    open: stack.len(),
                };
                if options.strict {
                    return Err(error.into());
                }
                tracing::warn!("Skipping \"{}\": {}", source.text.trim(), error);
                summary.skipped += 1;
                continue;
            }
        };
        let path = parent.join(line.name());
        match line.kind() {
            EntryKind::Directory => {
                filesystem.create_directory_all(&path)?;
                tracing::info!("Created directory: {}", path);
                stack.push(depth, &path);
                summary.directories += 1;
            }
            EntryKind::File => {
                filesystem.create_directory_all(&parent)?;
                if filesystem.is_directory(&path) {
                    anyhow::bail!("Cannot create file {}: a directory is in the way", path);
                }
                filesystem.create_file(&path)?;
                tracing::info!("Created file: {}", path);
                summary.files += 1;
            }
        }
    }

    tracing::debug!(
        "Applied {} directories and {} files ({} lines skipped)",
        summary.directories,
        summary.files,
        summary.skipped
    );
    Ok(summary)
}
