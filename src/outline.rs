//! Chapter outline derived from the chapter marks and the buffer.

use std::collections::BTreeSet;
use std::fmt;

/// Label shown for a chapter mark whose line no longer exists.
pub const INVALID_LABEL: &str = "(invalid)";

/// One row of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// 1-based position in the outline.
    pub rank: usize,
    /// 0-based line index of the mark.
    pub line: usize,
    /// Trimmed line text, or None when the buffer has shrunk below `line`.
    pub title: Option<String>,
}

impl OutlineEntry {
    pub fn is_valid(&self) -> bool {
        self.title.is_some()
    }
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{}. {} (line {})", self.rank, title, self.line + 1),
            None => write!(f, "{}. {}", self.rank, INVALID_LABEL),
        }
    }
}

/// Builds the outline in ascending line order.
pub fn build(chapters: &BTreeSet<usize>, lines: &[String]) -> Vec<OutlineEntry> {
    chapters
        .iter()
        .enumerate()
        .map(|(i, &line)| OutlineEntry {
            rank: i + 1,
            line,
            title: lines.get(line).map(|text| text.trim().to_string()),
        })
        .collect()
}

/// Resolves a 1-based rank to its target line. Out-of-bounds ranks and
/// stale entries give None.
pub fn select(entries: &[OutlineEntry], rank: usize) -> Option<usize> {
    let entry = entries.get(rank.checked_sub(1)?)?;
    entry.is_valid().then_some(entry.line)
}
