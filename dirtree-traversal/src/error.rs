use std::fmt::Display;

use camino::Utf8PathBuf;

/// Problems specific to exporting and creating directory trees
///
/// These are returned within an [`anyhow::Error`] and may be recovered with
/// [`downcast_ref`][anyhow::Error::downcast_ref]. Failures of the underlying filesystem keep
/// their original [`std::io::Error`] within the error chain instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// The root to be exported does not exist or is not a directory
    InvalidRoot(Utf8PathBuf),
    /// The listing to create from does not exist or is not a file
    InvalidListing(Utf8PathBuf),
    /// An ignore pattern is not a valid glob
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Why it could not be compiled
        reason: String,
    },
    /// A line is nested deeper than any directory open above it
    UnreachableDepth {
        /// The line number within the listing
        line_number: usize,
        /// The depth of the line
        depth: usize,
        /// The number of directories open at that point
        open: usize,
    },
}

impl Display for TraversalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalError::InvalidRoot(path) => write!(f, "{path} is not a valid directory"),
            TraversalError::InvalidListing(path) => write!(f, "{path} is not a valid file"),
            TraversalError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid ignore pattern \"{pattern}\": {reason}")
            }
            TraversalError::UnreachableDepth {
                line_number,
                depth,
                open,
            } => write!(
                f,
                "Line {line_number} has depth {depth} but only {open} parent director{} open",
                if *open == 1 { "y is" } else { "ies are" }
            ),
        }
    }
}

impl std::error::Error for TraversalError {}
