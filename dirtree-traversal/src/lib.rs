//! Conversion between directory trees and their listings
//!
//! [`export`] walks a directory tree on any [`Filesystem`][dirtree_filesystem::Filesystem] and
//! writes its listing, while [`create_from_file`] reads a listing and creates the directories
//! and empty files it describes:
//!
//! ```
//! use dirtree_filesystem::{Filesystem, MemoryFilesystem};
//! use dirtree_listing::render_listing;
//! use dirtree_traversal::{create, encode, CreateOptions, ExportOptions};
//!
//! let mut fs = MemoryFilesystem::new();
//! fs.create_directory("/out")?;
//! create(
//!     "proj/\n├─ src/\n│  └─ main.rs\n└─ README.md",
//!     "/out",
//!     &CreateOptions::default(),
//!     &mut fs,
//! )?;
//! assert!(fs.is_file("/out/proj/src/main.rs"));
//!
//! let lines = encode("/out/proj", &ExportOptions::default(), &fs)?;
//! assert_eq!(render_listing(&lines), "proj/\n├─ src/\n│  └─ main.rs\n└─ README.md");
//! # Ok::<(), anyhow::Error>(())
//! ```
#![warn(missing_docs)]

mod create;
mod encode;
mod error;
mod pattern;
mod stack;

pub use create::{create, create_from_file, read_listing, CreateOptions, CreateSummary};
pub use encode::{encode, export, ExportOptions};
pub use error::TraversalError;
pub use pattern::IgnoreRules;
pub use stack::DirectoryStack;
