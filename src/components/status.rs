use chrono::{DateTime, TimeZone};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub struct StatusInfo<'a> {
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub col: usize,
    pub message: &'a str,
    pub word_count: usize,
    pub goal: usize,
    pub clock: &'a str,
}

pub fn render(frame: &mut Frame, area: Rect, info: StatusInfo) {
    // Fill the entire status bar background
    let bg = Paragraph::new("").style(theme::status_style());
    frame.render_widget(bg, area);

    let position = format!("  Ln {}, Col {}", info.line, info.col);
    // Right: word count (against the goal if set) + clock
    let words = if info.goal > 0 {
        format!("{} / {} words", info.word_count, info.goal)
    } else {
        format!("{} words", info.word_count)
    };
    let counts = format!("{} | {}  ", words, info.clock);

    let chunks = Layout::horizontal([
        Constraint::Length(position.len() as u16),
        Constraint::Fill(1),
        Constraint::Length(counts.len() as u16),
    ])
    .split(area);

    // Left: Ln/Col
    let left = Paragraph::new(Line::from(Span::styled(position, theme::status_style())));
    frame.render_widget(left, chunks[0]);

    // Center: status message
    if !info.message.is_empty() {
        let center = Paragraph::new(Line::from(Span::styled(
            info.message.to_string(),
            theme::status_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(center, chunks[1]);
    }

    let right = Paragraph::new(Line::from(Span::styled(counts, theme::status_style())))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[2]);
}

/// Formats the status bar clock: `14:05` or `02:05 PM`.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>, clock24h: bool) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if clock24h {
        now.format("%H:%M").to_string()
    } else {
        now.format("%I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clock_formats() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(format_clock(&t, true), "14:05");
        assert_eq!(format_clock(&t, false), "02:05 PM");
    }
}
