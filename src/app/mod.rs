use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::codec;
use crate::components::{editor, header, popup, status};
use crate::config::Config;
use crate::document::Document;
use crate::error::{self, Error, Result};
use crate::keymap::{self, Command};
use crate::outline::{self, OutlineEntry};
use crate::theme;
use crate::viewport;
use crate::wrap::{byte_index, char_len};

/// How long status bar messages stay visible before auto-clearing.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Maximum width for the UI content area. Wider terminals get centered, capped layout.
const MAX_WIDTH: u16 = 100;

/// Longest input a prompt accepts.
const MAX_INPUT: usize = 255;

/// What a single-line prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Open,
    Goal,
    JumpToLine,
    Import,
    Export,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Name document",
            PromptKind::Open => "Load document",
            PromptKind::Goal => "Set word goal",
            PromptKind::JumpToLine => "Jump to line",
            PromptKind::Import => "Import plain text file",
            PromptKind::Export => "Export clean copy as",
        }
    }
}

/// An editable single-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
    /// Cursor position in `input`, counted in chars.
    pub cursor: usize,
}

impl Prompt {
    /// A prompt pre-filled with `initial`, cursor at the end.
    pub fn new(kind: PromptKind, initial: &str) -> Self {
        Self {
            kind,
            input: initial.to_string(),
            cursor: char_len(initial),
        }
    }

    /// Inserts `ch` at the cursor unless the input is full.
    /// Returns false when it was dropped.
    pub fn insert(&mut self, ch: char) -> bool {
        if char_len(&self.input) >= MAX_INPUT {
            return false;
        }
        let at = byte_index(&self.input, self.cursor);
        self.input.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = byte_index(&self.input, self.cursor);
            self.input.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < char_len(&self.input) {
            let at = byte_index(&self.input, self.cursor);
            self.input.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(char_len(&self.input));
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = char_len(&self.input);
    }
}

/// Outline popup state: the entries, the highlighted row and any rank typed
/// so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineView {
    pub entries: Vec<OutlineEntry>,
    pub selected: usize,
    pub typed: String,
}

/// Popups that own the keyboard until they resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Prompt(Prompt),
    Outline(OutlineView),
    /// Waiting for `i` (import) or `e` (export).
    ImportExport,
    Help,
}

/// Session state. Exit is only reachable from `Editing` with a clean
/// document, or through `ConfirmExit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Modal(Modal),
    ConfirmExit,
}

pub struct App {
    // --- Core state ---
    pub mode: Mode,
    pub document: Document,
    pub config: Config,
    pub should_quit: bool,

    // --- Status bar ---
    pub status_message: String,
    pub status_time: Option<Instant>,

    // --- Viewport ---
    /// First buffer row shown in the editor pane.
    pub scroll_offset: usize,
    viewport_height: u16,
    /// Cached content area rect from last render.
    content_area: Rect,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            mode: Mode::Editing,
            document: Document::new(config.clock24h),
            config,
            should_quit: false,
            status_message: "Ctrl+H: help | Ctrl+W: save | Ctrl+X: exit".to_string(),
            status_time: Some(Instant::now()),
            scroll_offset: 0,
            viewport_height: 0,
            content_area: Rect::default(),
        }
    }

    // ─── Tick / timers ───────────────────────────────────────────────────

    /// Called after every frame. Clears expired status messages.
    pub fn tick(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() >= STATUS_DURATION {
                self.status_message.clear();
                self.status_time = None;
            }
        }
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Top-level event handler. Dispatches to key or paste handlers.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            // Bracketed paste: terminal sends entire clipboard as one event
            Event::Paste(text) => self.handle_paste(text),
            _ => {}
        }
        self.update_scroll();
    }

    /// Shows a temporary message in the status bar.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = msg.to_string();
        self.status_time = Some(Instant::now());
    }

    /// Reports a failed command in the status bar and the log.
    fn report(&mut self, err: Error) {
        tracing::warn!(error = %err, "command failed");
        self.set_status(&err.to_string());
    }

    /// Column at which typed lines reflow: the configured width, or the
    /// editor pane minus the gutter. 0 until the first render.
    pub fn wrap_width(&self) -> usize {
        match self.config.wrap_width {
            Some(width) => width,
            None => (self.content_area.width as usize).saturating_sub(editor::GUTTER_WIDTH as usize),
        }
    }

    /// Keeps the cursor row inside the visible window.
    fn update_scroll(&mut self) {
        let (row, _) = self.document.buffer.cursor();
        self.scroll_offset = viewport::scroll_offset(
            row,
            self.scroll_offset,
            self.viewport_height as usize,
            self.document.buffer.line_count(),
        );
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(?mode, "mode change");
        self.mode = mode;
    }

    fn open_prompt(&mut self, kind: PromptKind, initial: &str) {
        self.set_mode(Mode::Modal(Modal::Prompt(Prompt::new(kind, initial))));
    }
}

mod input;
mod modal;
mod render;
mod save;
