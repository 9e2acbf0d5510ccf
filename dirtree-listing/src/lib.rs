//! This crate provides the text form of a directory tree (a "listing"), as written by
//! `dirtree export` and read back by `dirtree create`.
//!
//! A listing starts with the name of the root directory, followed by one line per entry beneath
//! it. Each entry line is made up of a prefix of fixed-width (three column) units, one per
//! ancestor, a connector and the entry name. Directories are signified by a trailing `/`:
//!
//! | Syntax                  | Description
//! |-------------------------|---------------------------
//! | `│  `                   | Prefix unit: the ancestor at this level has further siblings
//! | `   `                   | Prefix unit: the ancestor at this level was the last of its siblings
//! | `├─ ` _name_            | An entry with further siblings after it
//! | `└─ ` _name_            | The last entry among its siblings
//! | _name_                  | A file
//! | _name_`/`               | A directory
//!
//! For example:
//! ```text
//! proj/
//! ├─ src/
//! │  └─ main.rs
//! └─ README.md
//! ```
//!
//! The depth of an entry is recovered purely from the width of its prefix (see [`parse_listing`]),
//! so the glyphs used within the prefix do not affect the structure.
//!
//! ```
//! use dirtree_listing::{parse_listing, EntryKind};
//!
//! let listing = "proj/\n├─ src/\n│  └─ main.rs\n└─ README.md";
//! let lines = parse_listing(listing)
//!     .map(|parsed| parsed.map(|source| source.tree_line))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert!(lines[0].is_root());
//! assert_eq!(lines[2].name(), "main.rs");
//! assert_eq!(lines[2].depth(), 1);
//! assert_eq!(lines[3].kind(), EntryKind::File);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs)]

use std::fmt::Display;

mod text;
pub use text::{parse_listing, Listing, OwnedParseError, ParseError, SourceLine};

/// The number of characters making up each unit of an entry's prefix
pub const COLUMN_WIDTH: usize = 3;

/// One fixed-width unit of an entry's prefix, standing for one of its ancestors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The ancestor still has siblings listed further down (`│  `)
    Continuation,
    /// The ancestor was the last of its siblings (three spaces)
    Blank,
}

impl Column {
    /// The text of this prefix unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Continuation => "│  ",
            Column::Blank => "   ",
        }
    }
}

/// The glyph joining an entry to the vertical line of its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Further siblings follow this entry (`├─ `)
    Middle,
    /// This entry is the last of its siblings (`└─ `)
    Last,
}

impl Connector {
    /// Chooses the connector for an entry given whether it is the last of its siblings
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::Last
        } else {
            Connector::Middle
        }
    }

    /// The text of this connector, including its trailing space
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::Middle => "├─ ",
            Connector::Last => "└─ ",
        }
    }

    /// The prefix unit written beneath this entry for each of its descendants
    pub fn column(&self) -> Column {
        match self {
            Connector::Middle => Column::Continuation,
            Connector::Last => Column::Blank,
        }
    }
}

/// Whether an entry is a directory or a file
///
/// Directories are ordered before files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    /// A directory, written with a trailing `/`
    Directory,
    /// A regular (empty) file
    File,
}

/// A single line of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    prefix: Vec<Column>,
    connector: Option<Connector>,
    name: String,
    kind: EntryKind,
}

impl TreeLine {
    /// Constructs the line naming the root directory of the listing
    pub fn root(name: impl Into<String>) -> Self {
        TreeLine {
            prefix: vec![],
            connector: None,
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Constructs the line of an entry beneath the root
    pub fn entry(
        prefix: Vec<Column>,
        connector: Connector,
        name: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        TreeLine {
            prefix,
            connector: Some(connector),
            name: name.into(),
            kind,
        }
    }

    /// The nesting level of this line, where the root and its immediate children are both at 0
    pub fn depth(&self) -> usize {
        self.prefix.len()
    }

    /// Returns true if this is the root line, having no connector
    pub fn is_root(&self) -> bool {
        self.connector.is_none()
    }

    /// The bare name of the entry, without any trailing `/`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this line describes a directory or a file
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns true if this line describes a directory
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// The prefix units of this line, one per ancestor
    pub fn prefix(&self) -> &[Column] {
        &self.prefix
    }

    /// The connector of this line, or `None` for the root line
    pub fn connector(&self) -> Option<Connector> {
        self.connector
    }

    /// The prefix to be given to the lines of this entry's children
    pub fn child_prefix(&self) -> Vec<Column> {
        match self.connector {
            None => vec![],
            Some(connector) => {
                let mut prefix = Vec::with_capacity(self.prefix.len() + 1);
                prefix.extend_from_slice(&self.prefix);
                prefix.push(connector.column());
                prefix
            }
        }
    }
}

impl Display for TreeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for column in &self.prefix {
            f.write_str(column.as_str())?;
        }
        if let Some(connector) = self.connector {
            f.write_str(connector.as_str())?;
        }
        write!(
            f,
            "{}{}",
            self.name,
            if self.is_directory() { "/" } else { "" }
        )
    }
}

/// Joins lines into the text of a listing, separated by (but not ending with) newlines
pub fn render_listing<'a>(lines: impl IntoIterator<Item = &'a TreeLine>) -> String {
    let mut text = String::new();
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        text.push_str(&line.to_string());
    }
    text
}
