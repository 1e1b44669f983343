//! Modal input: prompts, the outline picker, the import/export choice, help
//! and the unsaved-changes confirmation.
//!
//! Each handler receives the modal by value (see `handle_key`) and puts it
//! back into `self.mode` when it stays open.

use super::*;

impl App {
    pub(super) fn handle_modal_key(&mut self, modal: Modal, key: KeyEvent) {
        match modal {
            // Any key dismisses help (swallows the keypress)
            Modal::Help => {}
            Modal::Prompt(prompt) => self.handle_prompt_key(prompt, key),
            Modal::Outline(view) => self.handle_outline_key(view, key),
            Modal::ImportExport => match key.code {
                KeyCode::Char('i') | KeyCode::Char('I') => self.open_prompt(PromptKind::Import, ""),
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    let name = self.document.filename.clone();
                    self.open_prompt(PromptKind::Export, &name);
                }
                KeyCode::Esc => self.set_status("Cancelled"),
                _ => self.mode = Mode::Modal(Modal::ImportExport),
            },
        }
    }

    // ─── Prompts ─────────────────────────────────────────────────────────

    /// Enter submits, Esc cancels, everything else edits the input line.
    fn handle_prompt_key(&mut self, mut prompt: Prompt, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_status("Cancelled"),
            KeyCode::Enter => self.submit_prompt(prompt),
            KeyCode::Backspace => {
                prompt.backspace();
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            KeyCode::Delete => {
                prompt.delete();
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            KeyCode::Left => {
                prompt.left();
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            KeyCode::Right => {
                prompt.right();
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            KeyCode::Home => {
                prompt.home();
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            KeyCode::End => {
                prompt.end();
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            KeyCode::Char(ch) => {
                if keymap::is_printable(ch) {
                    prompt.insert(ch);
                }
                self.mode = Mode::Modal(Modal::Prompt(prompt));
            }
            _ => self.mode = Mode::Modal(Modal::Prompt(prompt)),
        }
    }

    /// Runs the command behind a prompt. Blank input cancels.
    fn submit_prompt(&mut self, prompt: Prompt) {
        let input = prompt.input.trim();
        if input.is_empty() {
            self.set_status("Cancelled");
            return;
        }
        let result = match prompt.kind {
            PromptKind::SaveAs => self.save_as(input),
            PromptKind::Open => self.open(input),
            PromptKind::Goal => self.set_goal(input),
            PromptKind::JumpToLine => self.jump_to_line(input),
            PromptKind::Import => self.import(input),
            PromptKind::Export => self.export(input),
        };
        if let Err(e) = result {
            self.report(e);
        }
    }

    // ─── Outline ─────────────────────────────────────────────────────────

    /// Up/Down move the highlight, digits type a rank, Enter jumps.
    fn handle_outline_key(&mut self, mut view: OutlineView, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.set_status("Cancelled");
                return;
            }
            KeyCode::Enter => {
                self.select_outline_entry(&view);
                return;
            }
            KeyCode::Up => {
                view.selected = view.selected.saturating_sub(1);
                view.typed.clear();
            }
            KeyCode::Down => {
                view.selected = (view.selected + 1).min(view.entries.len().saturating_sub(1));
                view.typed.clear();
            }
            KeyCode::Backspace => {
                view.typed.pop();
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() && view.typed.len() < 6 => {
                view.typed.push(ch);
            }
            _ => {}
        }
        self.mode = Mode::Modal(Modal::Outline(view));
    }

    /// Jumps to the typed rank, or the highlighted entry when nothing was
    /// typed.
    fn select_outline_entry(&mut self, view: &OutlineView) {
        let rank = if view.typed.is_empty() {
            Some(view.selected + 1)
        } else {
            view.typed.parse().ok()
        };
        let target = rank.and_then(|rank| outline::select(&view.entries, rank));
        match target {
            Some(line) => match self.document.buffer.jump_to_line(line) {
                Ok(()) => self.set_status(&format!("Chapter at line {}", line + 1)),
                Err(e) => self.report(e),
            },
            None => self.set_status("No such chapter"),
        }
    }

    // ─── Exit confirmation ───────────────────────────────────────────────

    /// `y` quits, `n` or Esc returns to editing, other keys are ignored.
    pub(super) fn handle_confirm_exit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                tracing::info!("exit with unsaved changes confirmed");
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
            _ => self.mode = Mode::ConfirmExit,
        }
    }
}
