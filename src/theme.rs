use ratatui::style::{Color, Modifier, Style};

// Base colors; Color::Reset inherits terminal defaults
pub const BG: Color = Color::Reset;
pub const FG: Color = Color::Reset;
pub const BORDER: Color = Color::DarkGray;

// UI elements
pub const BAR_BG: Color = Color::Reset;
pub const BAR_FG: Color = Color::Reset;
pub const SELECTION: Color = Color::Blue;
pub const KEY_LABEL: Color = Color::Cyan;

// Chapters
pub const CHAPTER: Color = Color::Rgb(130, 170, 255);
pub const CHAPTER_MARK: Color = Color::Blue;

// Status indicators
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

// White for text on colored backgrounds
pub const WHITE: Color = Color::White;

// Tilde color for empty lines beyond file content
pub const TILDE: Color = Color::DarkGray;

// Pre-built styles
pub fn editor_style() -> Style {
    Style::default()
}

pub fn header_style() -> Style {
    Style::default()
}

pub fn status_style() -> Style {
    Style::default()
}

pub fn chapter_style() -> Style {
    Style::default()
        .fg(CHAPTER)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_style() -> Style {
    Style::default().fg(FG).bg(BAR_BG)
}

pub fn popup_border_style() -> Style {
    Style::default().fg(BORDER)
}

pub fn key_label_style() -> Style {
    Style::default().fg(KEY_LABEL)
}

pub fn selected_style() -> Style {
    Style::default()
        .fg(WHITE)
        .bg(SELECTION)
        .add_modifier(Modifier::BOLD)
}

pub fn input_cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}
