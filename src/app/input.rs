//! Input handling: routes keys by mode and runs editing commands.

use super::*;

impl App {
    /// Handles bracketed paste events.
    /// Inserts text into the open prompt if there is one, otherwise into the buffer.
    pub(super) fn handle_paste(&mut self, text: String) {
        if self.mode == Mode::Editing {
            let width = self.wrap_width();
            self.document.insert_str(&text, width);
            return;
        }
        if let Mode::Modal(Modal::Prompt(prompt)) = &mut self.mode {
            for ch in text.chars().filter(|&c| keymap::is_printable(c)) {
                if !prompt.insert(ch) {
                    break;
                }
            }
        }
    }

    // ─── Key handling ────────────────────────────────────────────────────

    /// Main key handler. The current mode is taken out for the duration of
    /// the key so handlers can freely switch to another one; a modal that
    /// stays open puts itself back.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        match std::mem::replace(&mut self.mode, Mode::Editing) {
            Mode::Editing => {
                if let Some(command) = keymap::command_for(&key) {
                    self.run_command(command);
                }
            }
            Mode::Modal(modal) => self.handle_modal_key(modal, key),
            Mode::ConfirmExit => self.handle_confirm_exit_key(key),
        }
    }

    /// Runs one editing-mode command.
    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Exit => {
                if self.document.dirty {
                    self.set_mode(Mode::ConfirmExit);
                } else {
                    self.should_quit = true;
                }
            }
            Command::Save => {
                if let Err(e) = self.save() {
                    self.report(e);
                }
            }
            Command::SaveAs => {
                let name = self.document.filename.clone();
                self.open_prompt(PromptKind::SaveAs, &name);
            }
            Command::Open => self.open_prompt(PromptKind::Open, ""),
            Command::ToggleClock => {
                self.document.toggle_clock();
                let label = if self.document.meta.clock24h {
                    "24-hour clock"
                } else {
                    "12-hour clock"
                };
                self.set_status(label);
            }
            Command::SetGoal => {
                let current = match self.document.meta.goal {
                    0 => String::new(),
                    goal => goal.to_string(),
                };
                self.open_prompt(PromptKind::Goal, &current);
            }
            Command::ToggleChapter => {
                let (line, marked) = self.document.toggle_chapter_at_cursor();
                tracing::debug!(line, marked, "chapter toggled");
                let verb = if marked { "marked" } else { "unmarked" };
                self.set_status(&format!("Line {} {} as chapter.", line + 1, verb));
            }
            Command::ShowOutline => self.show_outline(),
            Command::ImportExport => self.set_mode(Mode::Modal(Modal::ImportExport)),
            Command::JumpToLine => self.open_prompt(PromptKind::JumpToLine, ""),
            Command::ShowHelp => self.set_mode(Mode::Modal(Modal::Help)),
            Command::Move(direction) => self.document.buffer.move_cursor(direction),
            Command::Insert(ch) => {
                let width = self.wrap_width();
                self.document.insert_char(ch, width);
            }
            Command::Newline => self.document.insert_newline(),
            Command::Backspace => self.document.backspace(),
        }
    }

    /// Opens the outline popup, or explains why there is nothing to show.
    fn show_outline(&mut self) {
        let entries = outline::build(&self.document.meta.chapters, self.document.buffer.lines());
        if entries.is_empty() {
            self.set_status("No chapters marked");
            return;
        }
        self.set_mode(Mode::Modal(Modal::Outline(OutlineView {
            entries,
            selected: 0,
            typed: String::new(),
        })));
    }

    // ─── Prompt commands ─────────────────────────────────────────────────

    /// Sets the word goal from prompt input; 0 clears it.
    pub fn set_goal(&mut self, input: &str) -> Result<()> {
        let goal = error::parse_number(input)?;
        self.document.set_goal(goal);
        tracing::debug!(goal, "word goal set");
        if goal == 0 {
            self.set_status("Word goal cleared");
        } else {
            self.set_status(&format!("Word goal set to {}", goal));
        }
        Ok(())
    }

    /// Moves the cursor to the start of a 1-based line number.
    pub fn jump_to_line(&mut self, input: &str) -> Result<()> {
        let line = error::parse_number(input)?;
        let total = self.document.buffer.line_count();
        if line == 0 {
            return Err(Error::LineOutOfRange { line, total });
        }
        self.document.buffer.jump_to_line(line - 1)?;
        self.set_status(&format!("Line {}", line));
        Ok(())
    }
}
