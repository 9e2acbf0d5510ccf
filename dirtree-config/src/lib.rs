//! Configuration of the `dirtree` export and create operations
//!
//! Settings come from the command line, optionally layered over a `dirtree.toml` file:
//! ```toml
//! [export]
//! ignore = [".git", "target"]
//! ignore_file = ".treeignore"
//! depth = 3
//! output = "structure.txt"
//!
//! [create]
//! strip_root = true
//! strict = false
//! ```
//! Values given on the command line take precedence, except for ignore patterns, which are
//! gathered from every source.
#![warn(missing_docs)]

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};

mod file;
pub use file::{ConfigFile, CreateSection, ExportSection};

mod ignore;
pub use ignore::{parse_ignore_patterns, read_ignore_file};

/// The listing written by `export` when no output is given
pub const DEFAULT_OUTPUT: &str = "structure.txt";

/// Configuration of an export, from a directory tree to a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// The directory to be listed
    root: Utf8PathBuf,

    /// The listing file to write
    output: Utf8PathBuf,

    /// Glob patterns of directories to leave out
    ignore: Vec<String>,

    /// Maximum depth of the listing, unlimited if not set
    max_depth: Option<i32>,
}

impl ExportConfig {
    /// Constructs the default configuration for exporting the given directory
    pub fn new(root: impl AsRef<Utf8Path>) -> Self {
        ExportConfig {
            root: root.as_ref().to_owned(),
            output: DEFAULT_OUTPUT.into(),
            ignore: vec![],
            max_depth: None,
        }
    }

    /// Applies the settings of a dirtree.toml file
    pub fn load(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let file = ConfigFile::load(path)?;
        self.apply_file(&file)
    }

    /// Applies the `[export]` settings of an already loaded config file
    pub fn apply_file(&mut self, file: &ConfigFile) -> Result<()> {
        let ExportSection {
            ignore,
            ignore_file,
            depth,
            output,
        } = &file.export;
        self.add_ignore_patterns(ignore.iter().cloned());
        if let Some(ignore_file) = ignore_file {
            self.add_ignore_file(ignore_file)?;
        }
        if let Some(depth) = depth {
            self.max_depth = Some(*depth);
        }
        if let Some(output) = output {
            self.output = output.clone();
        }
        Ok(())
    }

    /// Sets the listing file to write
    pub fn set_output(&mut self, output: impl AsRef<Utf8Path>) {
        self.output = output.as_ref().to_owned();
    }

    /// Limits the depth of the listing
    pub fn set_max_depth(&mut self, max_depth: i32) {
        self.max_depth = Some(max_depth);
    }

    /// Adds to the glob patterns of directories to leave out
    pub fn add_ignore_patterns(&mut self, patterns: impl IntoIterator<Item = String>) {
        self.ignore.extend(patterns)
    }

    /// Adds the patterns read from an ignore file
    pub fn add_ignore_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let patterns = read_ignore_file(path)?;
        self.add_ignore_patterns(patterns);
        Ok(())
    }

    /// The directory to be listed
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The listing file to write
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    /// Glob patterns of directories to leave out
    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore
    }

    /// Maximum depth of the listing, if limited
    pub fn max_depth(&self) -> Option<i32> {
        self.max_depth
    }
}

/// Configuration of a create, from a listing to a directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateConfig {
    /// The listing to read
    listing: Utf8PathBuf,

    /// The directory under which the tree is created
    destination: Utf8PathBuf,

    /// Whether the root line of the listing is left out
    strip_root: bool,

    /// Whether to stop at the first malformed or unreachable line
    strict: bool,

    /// Whether to only simulate in memory
    dry_run: bool,
}

impl CreateConfig {
    /// Constructs the default configuration for creating a tree from the given listing
    pub fn new(listing: impl AsRef<Utf8Path>, destination: impl AsRef<Utf8Path>) -> Self {
        CreateConfig {
            listing: listing.as_ref().to_owned(),
            destination: destination.as_ref().to_owned(),
            strip_root: false,
            strict: false,
            dry_run: false,
        }
    }

    /// Applies the settings of a dirtree.toml file
    pub fn load(&mut self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let file = ConfigFile::load(path)?;
        self.apply_file(&file);
        Ok(())
    }

    /// Applies the `[create]` settings of an already loaded config file
    pub fn apply_file(&mut self, file: &ConfigFile) {
        let CreateSection { strip_root, strict } = file.create;
        self.strip_root |= strip_root;
        self.strict |= strict;
    }

    /// Leaves out the root line of the listing, creating its entries directly in the destination
    pub fn set_strip_root(&mut self, strip_root: bool) {
        self.strip_root |= strip_root;
    }

    /// Stops at the first malformed or unreachable line
    pub fn set_strict(&mut self, strict: bool) {
        self.strict |= strict;
    }

    /// Simulates creation in memory instead of on disk
    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.dry_run = dry_run;
    }

    /// The listing to read
    pub fn listing(&self) -> &Utf8Path {
        &self.listing
    }

    /// The directory under which the tree is created
    pub fn destination(&self) -> &Utf8Path {
        &self.destination
    }

    /// Whether the root line of the listing is left out
    pub fn strip_root(&self) -> bool {
        self.strip_root
    }

    /// Whether to stop at the first malformed or unreachable line
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Whether to only simulate in memory
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
