//! Document metadata and the in-memory document it belongs to.

use std::collections::BTreeSet;

use crate::buffer::LineBuffer;

/// Per-document settings stored in the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Word goal; 0 means no goal.
    pub goal: usize,
    /// 24-hour clock when true, 12-hour otherwise.
    pub clock24h: bool,
    /// Line indices marked as chapter titles. Not renumbered on edits.
    pub chapters: BTreeSet<usize>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self::with_clock(true)
    }
}

impl Metadata {
    /// Empty metadata with the given clock format.
    pub fn with_clock(clock24h: bool) -> Self {
        Self {
            goal: 0,
            clock24h,
            chapters: BTreeSet::new(),
        }
    }

    pub fn set_goal(&mut self, goal: usize) {
        self.goal = goal;
    }

    pub fn toggle_clock(&mut self) {
        self.clock24h = !self.clock24h;
    }

    /// Marks `line` as a chapter, or unmarks it if already marked.
    /// Returns true if the line is marked afterwards.
    pub fn toggle_chapter(&mut self, line: usize) -> bool {
        if self.chapters.remove(&line) {
            false
        } else {
            self.chapters.insert(line);
            true
        }
    }

    pub fn is_chapter(&self, line: usize) -> bool {
        self.chapters.contains(&line)
    }
}

/// Buffer, metadata, filename and dirty flag for the open document.
///
/// The mutating methods set `dirty`; only [`Document::mark_saved`] and
/// [`Document::replace`] clear it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub buffer: LineBuffer,
    pub meta: Metadata,
    /// Bare name (no `.txt`); empty while untitled.
    pub filename: String,
    pub dirty: bool,
}

impl Document {
    /// An untitled, empty document.
    pub fn new(clock24h: bool) -> Self {
        Self {
            buffer: LineBuffer::new(),
            meta: Metadata::with_clock(clock24h),
            filename: String::new(),
            dirty: false,
        }
    }

    /// Display name for bars and prompts.
    pub fn display_name(&self) -> &str {
        if self.filename.is_empty() {
            "Untitled"
        } else {
            &self.filename
        }
    }

    pub fn is_untitled(&self) -> bool {
        self.filename.is_empty()
    }

    pub fn insert_char(&mut self, ch: char, wrap_width: usize) {
        self.buffer.insert_char(ch, wrap_width);
        self.dirty = true;
    }

    pub fn insert_newline(&mut self) {
        self.buffer.insert_newline();
        self.dirty = true;
    }

    pub fn backspace(&mut self) {
        if self.buffer.backspace() {
            self.dirty = true;
        }
    }

    pub fn insert_str(&mut self, text: &str, wrap_width: usize) {
        if self.buffer.insert_str(text, wrap_width) {
            self.dirty = true;
        }
    }

    pub fn set_goal(&mut self, goal: usize) {
        self.meta.set_goal(goal);
        self.dirty = true;
    }

    pub fn toggle_clock(&mut self) {
        self.meta.toggle_clock();
        self.dirty = true;
    }

    /// Toggles the chapter mark on the cursor's line. Returns the line index
    /// and whether it is now marked.
    pub fn toggle_chapter_at_cursor(&mut self) -> (usize, bool) {
        let row = self.buffer.cursor().0;
        let marked = self.meta.toggle_chapter(row);
        self.dirty = true;
        (row, marked)
    }

    /// Swaps in freshly loaded content. The document is clean afterwards.
    pub fn replace(&mut self, lines: Vec<String>, meta: Metadata, filename: String) {
        self.buffer.replace_lines(lines);
        self.meta = meta;
        self.filename = filename;
        self.dirty = false;
    }

    /// Records a successful save under `filename`.
    pub fn mark_saved(&mut self, filename: String) {
        self.filename = filename;
        self.dirty = false;
    }

    /// Progress toward the goal as `(words, goal, percent)`, or None without
    /// a goal.
    pub fn goal_progress(&self) -> Option<(usize, usize, usize)> {
        if self.meta.goal == 0 {
            return None;
        }
        let words = self.buffer.word_count();
        Some((words, self.meta.goal, words * 100 / self.meta.goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_chapter_twice_restores_set() {
        let mut meta = Metadata::default();
        meta.chapters.insert(4);
        let before = meta.chapters.clone();
        assert!(meta.toggle_chapter(9));
        assert!(!meta.toggle_chapter(9));
        assert_eq!(meta.chapters, before);
    }

    #[test]
    fn toggle_chapter_unmarks_existing() {
        let mut meta = Metadata::default();
        meta.chapters.insert(2);
        assert!(!meta.toggle_chapter(2));
        assert!(meta.chapters.is_empty());
    }

    #[test]
    fn toggle_clock_flips() {
        let mut meta = Metadata::with_clock(true);
        meta.toggle_clock();
        assert!(!meta.clock24h);
        meta.toggle_clock();
        assert!(meta.clock24h);
    }

    #[test]
    fn edits_mark_document_dirty() {
        let mut doc = Document::new(true);
        assert!(!doc.dirty);
        doc.insert_char('a', 0);
        assert!(doc.dirty);
    }

    #[test]
    fn noop_backspace_keeps_document_clean() {
        let mut doc = Document::new(true);
        doc.backspace();
        assert!(!doc.dirty);
    }

    #[test]
    fn metadata_changes_mark_dirty() {
        let mut doc = Document::new(true);
        doc.set_goal(100);
        assert!(doc.dirty);

        let mut doc = Document::new(true);
        doc.toggle_clock();
        assert!(doc.dirty);

        let mut doc = Document::new(true);
        assert_eq!(doc.toggle_chapter_at_cursor(), (0, true));
        assert!(doc.dirty);
    }

    #[test]
    fn replace_and_save_clear_dirty() {
        let mut doc = Document::new(true);
        doc.insert_char('a', 0);
        doc.mark_saved("draft".to_string());
        assert!(!doc.dirty);
        assert_eq!(doc.display_name(), "draft");

        doc.insert_char('b', 0);
        doc.replace(vec!["x".into()], Metadata::default(), "other".into());
        assert!(!doc.dirty);
        assert_eq!(doc.buffer.lines(), &["x"]);
    }

    #[test]
    fn untitled_display_name() {
        assert_eq!(Document::new(true).display_name(), "Untitled");
    }

    #[test]
    fn goal_progress_percent() {
        let mut doc = Document::new(true);
        assert_eq!(doc.goal_progress(), None);
        doc.insert_str("one two three four", 0);
        doc.set_goal(8);
        assert_eq!(doc.goal_progress(), Some((4, 8, 50)));
    }
}
