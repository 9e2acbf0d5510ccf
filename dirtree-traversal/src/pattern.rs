use anyhow::Result;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::TraversalError;

/// Glob patterns selecting directories to leave out of an export
///
/// A directory is ignored if its bare name matches a pattern as written, or if its path
/// relative to the export root matches the pattern with any trailing `/` removed. As with
/// `fnmatch`, a `*` may match across `/`.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    patterns: Vec<String>,
    names: GlobSet,
    paths: GlobSet,
}

impl IgnoreRules {
    /// Rules that ignore nothing
    pub fn none() -> Self {
        IgnoreRules {
            patterns: vec![],
            names: GlobSet::empty(),
            paths: GlobSet::empty(),
        }
    }

    /// Compiles the given glob patterns
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut names = GlobSetBuilder::new();
        let mut paths = GlobSetBuilder::new();
        for pattern in &patterns {
            names.add(glob(pattern, pattern)?);
            paths.add(glob(pattern, pattern.trim_end_matches('/'))?);
        }
        Ok(IgnoreRules {
            names: build(names, &patterns)?,
            paths: build(paths, &patterns)?,
            patterns,
        })
    }

    /// The patterns as given
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns true if there are no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if a directory with the given name and root-relative path is to be ignored
    pub fn matches(&self, name: &str, relative: &str) -> bool {
        !self.is_empty() && (self.names.is_match(name) || self.paths.is_match(relative))
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        IgnoreRules::none()
    }
}

fn glob(pattern: &str, glob: &str) -> Result<Glob> {
    GlobBuilder::new(glob)
        .literal_separator(false)
        .build()
        .map_err(|e| {
            TraversalError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.kind().to_string(),
            }
            .into()
        })
}

fn build(builder: GlobSetBuilder, patterns: &[String]) -> Result<GlobSet> {
    builder.build().map_err(|e| {
        TraversalError::InvalidPattern {
            pattern: e.glob().map(str::to_owned).unwrap_or_else(|| patterns.join(" ")),
            reason: e.kind().to_string(),
        }
        .into()
    })
}
