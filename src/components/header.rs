use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub struct HeaderInfo<'a> {
    pub filename: &'a str,
    pub dirty: bool,
    /// `(words, goal, percent)` when a goal is set.
    pub goal_progress: Option<(usize, usize, usize)>,
}

pub fn render(frame: &mut Frame, area: Rect, info: HeaderInfo) {
    // Left side: filename + modified indicator
    let mut left_spans = vec![Span::styled(
        format!("  {}", info.filename),
        theme::header_style(),
    )];
    if info.dirty {
        left_spans.push(Span::styled(
            " \u{2022}",
            Style::default().fg(theme::WARNING).bg(theme::BAR_BG),
        ));
    }

    // Right side: goal progress
    let right_spans: Vec<Span> = match info.goal_progress {
        Some((words, goal, percent)) => {
            let color = if words >= goal { theme::SUCCESS } else { theme::BAR_FG };
            vec![Span::styled(
                format!(" Goal {}/{} ({}%)  ", words, goal, percent),
                Style::default().fg(color).bg(theme::BAR_BG),
            )]
        }
        None => Vec::new(),
    };

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(right_spans.iter().map(|s| s.width() as u16).sum()),
    ])
    .split(area);

    // Fill background
    let bg = Paragraph::new("").style(theme::header_style());
    frame.render_widget(bg, area);

    let left = Paragraph::new(Line::from(left_spans));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(right_spans));
    frame.render_widget(right, chunks[1]);
}
