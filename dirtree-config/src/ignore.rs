use anyhow::{Context, Result};
use camino::Utf8Path;

/// Reads ignore patterns from a file of one pattern per line
pub fn read_ignore_file(path: impl AsRef<Utf8Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Reading ignore file {path:?}"))?;
    let patterns = parse_ignore_patterns(&text);
    tracing::debug!("Read {} ignore pattern(s) from {}", patterns.len(), path);
    Ok(patterns)
}

/// Extracts ignore patterns from text, skipping blank lines and `#` comments
pub fn parse_ignore_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
