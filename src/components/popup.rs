//! Centered popup boxes drawn over the editor: prompts, choices, the
//! outline list and the help screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::outline::OutlineEntry;
use crate::theme;

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::popup_border_style())
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme::CHAPTER).add_modifier(Modifier::BOLD),
        ))
        .style(theme::popup_style())
}

fn draw(frame: &mut Frame, rect: Rect, title: &str, lines: Vec<Line>) {
    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(lines)
        .block(popup_block(title))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, rect);
}

/// Single-line input with a block cursor, plus a hint underneath.
/// `cursor` is a char index into `input`.
pub fn render_prompt(frame: &mut Frame, title: &str, input: &str, cursor: usize) {
    let rect = centered_rect(60, 6, frame.area());
    // Keep the cursor in view when the input is wider than the box
    let inner_width = (rect.width.saturating_sub(4) as usize).max(1);
    let start = (cursor + 1).saturating_sub(inner_width);
    let visible: Vec<char> = input.chars().skip(start).collect();
    let cursor = cursor - start;

    let mut spans = vec![Span::raw(" ")];
    spans.push(Span::raw(visible.iter().take(cursor).collect::<String>()));
    let cursor_char = visible.get(cursor).map_or(' ', |&c| c);
    spans.push(Span::styled(cursor_char.to_string(), theme::input_cursor_style()));
    if cursor < visible.len() {
        spans.push(Span::raw(visible[cursor + 1..].iter().collect::<String>()));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(
            " Enter to confirm, leave blank or Esc to cancel",
            Style::default().fg(theme::BORDER),
        )),
    ];
    draw(frame, rect, title, lines);
}

/// A short question answered with a single key.
pub fn render_choice(frame: &mut Frame, title: &str, message: &str) {
    let width = (message.len() as u16 + 6).max(30);
    let rect = centered_rect(width, 5, frame.area());
    let lines = vec![Line::from(""), Line::from(format!(" {}", message))];
    draw(frame, rect, title, lines);
}

/// The chapter list with the highlighted row and any typed rank.
pub fn render_outline(frame: &mut Frame, entries: &[OutlineEntry], selected: usize, typed: &str) {
    let area = frame.area();
    let longest = entries.iter().map(|e| e.to_string().len()).max().unwrap_or(0);
    let width = (longest as u16 + 8).max(36).min(area.width.saturating_sub(4));
    let height = (entries.len() as u16 + 5).min(area.height.saturating_sub(2).max(3));

    // Scroll the list so the selection stays visible
    let rows = height.saturating_sub(5).max(1) as usize;
    let first = (selected + 1).saturating_sub(rows);

    let mut lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .map(|(i, entry)| {
            let style = if i == selected {
                theme::selected_style()
            } else if entry.is_valid() {
                theme::popup_style()
            } else {
                Style::default().fg(theme::ERROR)
            };
            Line::from(Span::styled(format!(" {} ", entry), style))
        })
        .collect();
    lines.push(Line::from(""));
    let footer = if typed.is_empty() {
        " Enter: jump | number: pick | Esc: cancel".to_string()
    } else {
        format!(" Go to chapter: {}", typed)
    };
    lines.push(Line::from(Span::styled(footer, theme::key_label_style())));

    let rect = centered_rect(width, height, area);
    draw(frame, rect, "Outline", lines);
}

/// Keybinding reference. Dismissed by any key.
pub fn render_help(frame: &mut Frame, entries: &[(&str, &str)]) {
    let area = frame.area();
    let mut lines = vec![Line::from("")];
    for (keys, description) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", keys), theme::key_label_style()),
            Span::raw(description.to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to return to editing...",
        Style::default().fg(theme::BORDER),
    )));

    let height = lines.len() as u16 + 2;
    let rect = centered_rect(50, height, area);
    draw(frame, rect, "Bramble Help", lines);
}
