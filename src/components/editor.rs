use std::collections::BTreeSet;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

/// Columns reserved left of the text for the chapter marker.
pub const GUTTER_WIDTH: u16 = 2;

pub struct EditorView<'a> {
    pub lines: &'a [String],
    pub scroll_offset: usize,
    pub chapters: &'a BTreeSet<usize>,
}

/// Draws the visible slice of the buffer. Chapter lines get a gutter marker
/// and bold text; rows past the end of the buffer get vim-style tildes.
/// Long lines are clipped at the pane edge.
pub fn render(frame: &mut Frame, area: Rect, view: EditorView) {
    let height = area.height as usize;
    let visible = view
        .lines
        .iter()
        .enumerate()
        .skip(view.scroll_offset)
        .take(height);

    let mut rows: Vec<Line> = Vec::with_capacity(height);
    for (idx, text) in visible {
        if view.chapters.contains(&idx) {
            rows.push(Line::from(vec![
                Span::styled("\u{258E} ", Style::default().fg(theme::CHAPTER_MARK)),
                Span::styled(text.as_str(), theme::chapter_style()),
            ]));
        } else {
            rows.push(Line::from(vec![
                Span::raw(" ".repeat(GUTTER_WIDTH as usize)),
                Span::styled(text.as_str(), theme::editor_style()),
            ]));
        }
    }
    while rows.len() < height {
        rows.push(Line::from(Span::styled(
            format!("{:width$}~", "", width = GUTTER_WIDTH as usize),
            Style::default().fg(theme::TILDE),
        )));
    }

    frame.render_widget(Paragraph::new(rows).style(theme::editor_style()), area);
}

/// Screen position of the buffer cursor, clamped to the pane, or None when
/// the cursor row is scrolled out of view.
pub fn cursor_position(area: Rect, scroll_offset: usize, cursor: (usize, usize)) -> Option<(u16, u16)> {
    let (row, col) = cursor;
    let screen_row = row.checked_sub(scroll_offset)?;
    if screen_row >= area.height as usize || area.width <= GUTTER_WIDTH {
        return None;
    }
    let max_col = (area.width - GUTTER_WIDTH - 1) as usize;
    let x = area.x + GUTTER_WIDTH + col.min(max_col) as u16;
    let y = area.y + screen_row as u16;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_position_offsets_gutter_and_scroll() {
        let area = Rect::new(10, 2, 40, 20);
        assert_eq!(cursor_position(area, 5, (7, 3)), Some((15, 4)));
    }

    #[test]
    fn cursor_position_clamps_long_columns() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(cursor_position(area, 0, (0, 50)), Some((9, 0)));
    }

    #[test]
    fn cursor_position_hidden_when_scrolled_away() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(cursor_position(area, 3, (1, 0)), None);
        assert_eq!(cursor_position(area, 0, (5, 0)), None);
    }
}
