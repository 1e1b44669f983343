//! UI rendering: main frame layout, editor pane, bars and modal overlays.

use super::*;

impl App {
    /// Runs one frame of the main loop: draw + tick.
    /// This is the canonical render path -- tested by render_test to ensure
    /// no accidental screen clears (which cause flicker).
    pub fn render_frame<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        self.tick();
        Ok(())
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let full = frame.area();

        // Fill entire frame background first (covers margins outside capped area)
        let bg = Paragraph::new("").style(theme::editor_style());
        frame.render_widget(bg, full);

        // Cap width and center horizontally
        let capped_width = full.width.min(MAX_WIDTH);
        let x_offset = (full.width - capped_width) / 2;
        let usable_area = Rect::new(x_offset, full.y, capped_width, full.height);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Divider
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Divider
            Constraint::Length(1), // Status
        ])
        .split(usable_area);

        self.viewport_height = chunks[2].height;
        self.content_area = chunks[2];
        self.update_scroll();

        header::render(
            frame,
            chunks[0],
            header::HeaderInfo {
                filename: self.document.display_name(),
                dirty: self.document.dirty,
                goal_progress: self.document.goal_progress(),
            },
        );

        // Thin dividers between bars and content
        let divider_style = Style::default().fg(theme::BORDER);
        let top_divider =
            Paragraph::new("\u{2500}".repeat(chunks[1].width as usize)).style(divider_style);
        frame.render_widget(top_divider, chunks[1]);
        let bottom_divider =
            Paragraph::new("\u{2500}".repeat(chunks[3].width as usize)).style(divider_style);
        frame.render_widget(bottom_divider, chunks[3]);

        editor::render(
            frame,
            chunks[2],
            editor::EditorView {
                lines: self.document.buffer.lines(),
                scroll_offset: self.scroll_offset,
                chapters: &self.document.meta.chapters,
            },
        );

        let (row, col) = self.document.buffer.cursor();
        let clock = status::format_clock(&chrono::Local::now(), self.document.meta.clock24h);
        status::render(
            frame,
            chunks[4],
            status::StatusInfo {
                line: row + 1,
                col: col + 1,
                message: &self.status_message,
                word_count: self.document.buffer.word_count(),
                goal: self.document.meta.goal,
                clock: &clock,
            },
        );

        // Terminal cursor only while typing into the buffer; popups draw their own
        if self.mode == Mode::Editing {
            if let Some((x, y)) =
                editor::cursor_position(chunks[2], self.scroll_offset, (row, col))
            {
                frame.set_cursor_position((x, y));
            }
        }

        // Modal overlay -- rendered last so it sits on top of everything
        self.render_overlay(frame);
    }

    fn render_overlay(&self, frame: &mut Frame) {
        match &self.mode {
            Mode::Editing => {}
            Mode::Modal(Modal::Prompt(prompt)) => {
                popup::render_prompt(frame, prompt.kind.title(), &prompt.input, prompt.cursor);
            }
            Mode::Modal(Modal::Outline(view)) => {
                popup::render_outline(frame, &view.entries, view.selected, &view.typed);
            }
            Mode::Modal(Modal::ImportExport) => {
                popup::render_choice(frame, "Import / Export", "(I)mport or (E)xport?");
            }
            Mode::Modal(Modal::Help) => popup::render_help(frame, keymap::HELP_ENTRIES),
            Mode::ConfirmExit => {
                popup::render_choice(frame, "Exit", "Unsaved changes. Exit anyway? (Y/N)");
            }
        }
    }
}
