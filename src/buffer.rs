//! The editable line buffer and its cursor.
//!
//! Columns are measured in characters. Every mutation re-clamps the cursor,
//! row first, then column against the (possibly changed) row.

use crate::error::{Error, Result};
use crate::wrap::{byte_index, char_len, wrap_line};

/// Cursor movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// An ordered, never-empty list of lines with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// A buffer holding a single empty line, cursor at (0, 0).
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Builds a buffer from loaded lines. An empty list becomes one empty line.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self { lines, row: 0, col: 0 }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Current `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn current_line(&self) -> &str {
        &self.lines[self.row]
    }

    /// Whitespace-separated words across the whole buffer.
    pub fn word_count(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum()
    }

    /// Places the cursor at `(row, col)`, clamped into the buffer.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
        self.clamp();
    }

    /// Moves the cursor to the start of `row` (0-based).
    pub fn jump_to_line(&mut self, row: usize) -> Result<()> {
        if row >= self.lines.len() {
            return Err(Error::LineOutOfRange {
                line: row + 1,
                total: self.lines.len(),
            });
        }
        self.row = row;
        self.col = 0;
        Ok(())
    }

    // ─── Edits ───────────────────────────────────────────────────────────

    /// Inserts `ch` at the cursor and advances one column. If the line now
    /// exceeds `wrap_width` it is reflowed in place and the cursor lands at
    /// the end of the wrapped tail. `wrap_width == 0` disables reflow.
    pub fn insert_char(&mut self, ch: char, wrap_width: usize) {
        let at = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(at, ch);
        self.col += 1;

        if wrap_width > 0 && char_len(&self.lines[self.row]) > wrap_width {
            self.reflow_current(wrap_width);
        }
        self.clamp();
    }

    /// Splits the current line at the cursor; the cursor moves to the start
    /// of the new line.
    pub fn insert_newline(&mut self) {
        let at = byte_index(&self.lines[self.row], self.col);
        let after = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, after);
        self.row += 1;
        self.col = 0;
        self.clamp();
    }

    /// Deletes the character left of the cursor, or joins the current line
    /// onto the previous one at column 0. Returns false at (0, 0).
    pub fn backspace(&mut self) -> bool {
        if self.col > 0 {
            let at = byte_index(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(at);
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        } else {
            return false;
        }
        self.clamp();
        true
    }

    /// Inserts pasted text: printable ASCII is typed one character at a
    /// time, `\n` splits the line, everything else is dropped.
    /// Returns whether anything was inserted.
    pub fn insert_str(&mut self, text: &str, wrap_width: usize) -> bool {
        let mut changed = false;
        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.insert_newline();
                    changed = true;
                }
                ' '..='~' => {
                    self.insert_char(ch, wrap_width);
                    changed = true;
                }
                _ => {}
            }
        }
        changed
    }

    /// Replaces the whole content and puts the cursor at (0, 0).
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        *self = Self::from_lines(lines);
    }

    // ─── Cursor movement ─────────────────────────────────────────────────

    /// Left/right wrap across line ends; up/down keep the column where the
    /// target line allows. Moving past the first or last line is a no-op.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = char_len(&self.lines[self.row]);
                }
            }
            Direction::Right => {
                if self.col < char_len(&self.lines[self.row]) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
            }
            Direction::Up => {
                if self.row > 0 {
                    self.row -= 1;
                }
            }
            Direction::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                }
            }
        }
        self.clamp();
    }

    // ─── Internal helpers ────────────────────────────────────────────────

    /// Replaces the current line with its wrapped pieces.
    fn reflow_current(&mut self, width: usize) {
        let wrapped = wrap_line(&self.lines[self.row], width);
        let added = wrapped.len() - 1;
        let tail_len = wrapped.last().map_or(0, |l| char_len(l));
        self.lines.splice(self.row..=self.row, wrapped);
        self.row += added;
        self.col = tail_len;
    }

    fn clamp(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = self.row.min(self.lines.len() - 1);
        self.col = self.col.min(char_len(&self.lines[self.row]));
    }
}
