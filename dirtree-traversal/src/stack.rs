use camino::{Utf8Path, Utf8PathBuf};

/// A directory that entries of a listing may currently be placed into
#[derive(Debug, Clone, PartialEq, Eq)]
struct DirectoryFrame {
    /// The depth of the line that opened this directory
    depth: usize,
    /// Where the directory was created
    path: Utf8PathBuf,
}

/// Keeps track of the directories opened by the lines of a listing, from the outermost
///
/// The frame at each index was opened by a line at that same depth, so a line at depth `d`
/// belongs in the directory opened at depth `d - 1`. Lines at depth 0 belong in the base
/// directory.
///
/// ```
/// use camino::Utf8Path;
/// use dirtree_traversal::DirectoryStack;
///
/// let mut stack = DirectoryStack::new("/out");
/// assert_eq!(stack.parent_for(0), Some(Utf8Path::new("/out")));
/// stack.push(0, "/out/src");
/// assert_eq!(stack.parent_for(1), Some(Utf8Path::new("/out/src")));
///
/// // Nothing was opened at depth 1, so depth 2 cannot be reached
/// assert_eq!(stack.parent_for(2), None);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryStack {
    base: Utf8PathBuf,
    frames: Vec<DirectoryFrame>,
}

impl DirectoryStack {
    /// Creates an empty stack whose top-level entries will be placed into `base`
    pub fn new(base: impl AsRef<Utf8Path>) -> Self {
        DirectoryStack {
            base: base.as_ref().to_owned(),
            frames: vec![],
        }
    }

    /// Makes the given root directory the base, opening it at depth 0
    pub fn open_root(&mut self, root: impl AsRef<Utf8Path>) {
        let root = root.as_ref();
        self.base = root.to_owned();
        self.frames.clear();
        self.frames.push(DirectoryFrame {
            depth: 0,
            path: root.to_owned(),
        });
    }

    /// The number of directories currently open
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no directories are open
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Closes any directories opened at or below `depth` and returns the directory in which an
    /// entry at `depth` belongs
    ///
    /// Returns `None`, leaving the stack unchanged, if the depth is beyond the open directories.
    pub fn parent_for(&mut self, depth: usize) -> Option<&Utf8Path> {
        if depth > self.frames.len() {
            return None;
        }
        self.frames.truncate(depth);
        match self.frames.last() {
            Some(frame) if depth > 0 => {
                debug_assert_eq!(frame.depth + 1, depth);
                Some(&frame.path)
            }
            _ => Some(&self.base),
        }
    }

    /// Opens a directory created by a line at `depth`
    ///
    /// This must directly follow a call to [`parent_for`][Self::parent_for] for the same depth.
    pub fn push(&mut self, depth: usize, path: impl AsRef<Utf8Path>) {
        debug_assert_eq!(depth, self.frames.len());
        self.frames.push(DirectoryFrame {
            depth,
            path: path.as_ref().to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_deeper_frames() {
        let mut stack = DirectoryStack::new("/out");
        stack.push(0, "/out/a");
        assert_eq!(stack.parent_for(1), Some(Utf8Path::new("/out/a")));
        stack.push(1, "/out/a/b");
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.parent_for(0), Some(Utf8Path::new("/out")));
        assert!(stack.is_empty());
    }

    #[test]
    fn depths_strictly_increase() {
        let mut stack = DirectoryStack::new("/out");
        stack.push(0, "/out/a");
        stack.parent_for(1);
        stack.push(1, "/out/a/b");
        stack.parent_for(2);
        stack.push(2, "/out/a/b/c");
        let depths: Vec<_> = stack.frames.iter().map(|frame| frame.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_leaves_stack_alone() {
        let mut stack = DirectoryStack::new("/out");
        stack.push(0, "/out/a");
        assert_eq!(stack.parent_for(3), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn root_frame() {
        let mut stack = DirectoryStack::new("/out");
        stack.open_root("/out/proj");
        assert_eq!(stack.base.as_str(), "/out/proj");
        assert_eq!(stack.parent_for(0), Some(Utf8Path::new("/out/proj")));
        // The root may also hold entries written one level deeper
        stack.open_root("/out/proj");
        assert_eq!(stack.parent_for(1), Some(Utf8Path::new("/out/proj")));
    }
}
