//! Maps terminal key events to editor commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::buffer::Direction;

/// Everything a keystroke can ask the editor to do while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Save,
    SaveAs,
    Open,
    ToggleClock,
    SetGoal,
    ToggleChapter,
    ShowOutline,
    ImportExport,
    JumpToLine,
    ShowHelp,
    Move(Direction),
    Insert(char),
    Newline,
    Backspace,
}

/// Key labels and descriptions for the help popup, in display order.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Ctrl+E", "Save As"),
    ("Ctrl+W", "Save"),
    ("Ctrl+O", "Open a document"),
    ("Ctrl+P", "Import / export plain text"),
    ("Ctrl+T", "Toggle 12h/24h clock"),
    ("Ctrl+G", "Set word goal"),
    ("Ctrl+N", "Mark/unmark line as chapter"),
    ("Ctrl+L", "Chapter outline"),
    ("Ctrl+K", "Jump to line"),
    ("Ctrl+H / F1", "This help"),
    ("Ctrl+X", "Exit"),
    ("Arrow keys", "Move cursor"),
];

/// Returns the command for `key`, or None for keys the editor ignores.
///
/// Ctrl+H arrives as a plain Backspace on some terminals; crossterm only
/// reports `Ctrl+'h'` when the terminal distinguishes the two.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    let command = match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char(ch)) => match ch.to_ascii_lowercase() {
            'x' => Command::Exit,
            'w' => Command::Save,
            'e' => Command::SaveAs,
            'o' => Command::Open,
            't' => Command::ToggleClock,
            'g' => Command::SetGoal,
            'n' => Command::ToggleChapter,
            'l' => Command::ShowOutline,
            'p' => Command::ImportExport,
            'k' => Command::JumpToLine,
            'h' => Command::ShowHelp,
            _ => return None,
        },
        (_, KeyCode::F(1)) => Command::ShowHelp,
        (_, KeyCode::Left) => Command::Move(Direction::Left),
        (_, KeyCode::Right) => Command::Move(Direction::Right),
        (_, KeyCode::Up) => Command::Move(Direction::Up),
        (_, KeyCode::Down) => Command::Move(Direction::Down),
        (_, KeyCode::Enter) => Command::Newline,
        (_, KeyCode::Backspace) => Command::Backspace,
        (m, KeyCode::Char(ch))
            if is_printable(ch) && !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Command::Insert(ch)
        }
        _ => return None,
    };
    Some(command)
}

/// Printable single-byte ASCII, the only text the editor inserts.
pub fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn control_keys_map_to_commands() {
        assert_eq!(command_for(&ctrl('x')), Some(Command::Exit));
        assert_eq!(command_for(&ctrl('w')), Some(Command::Save));
        assert_eq!(command_for(&ctrl('e')), Some(Command::SaveAs));
        assert_eq!(command_for(&ctrl('o')), Some(Command::Open));
        assert_eq!(command_for(&ctrl('t')), Some(Command::ToggleClock));
        assert_eq!(command_for(&ctrl('g')), Some(Command::SetGoal));
        assert_eq!(command_for(&ctrl('n')), Some(Command::ToggleChapter));
        assert_eq!(command_for(&ctrl('l')), Some(Command::ShowOutline));
        assert_eq!(command_for(&ctrl('p')), Some(Command::ImportExport));
        assert_eq!(command_for(&ctrl('k')), Some(Command::JumpToLine));
        assert_eq!(command_for(&ctrl('h')), Some(Command::ShowHelp));
        assert_eq!(command_for(&key(KeyCode::F(1))), Some(Command::ShowHelp));
    }

    #[test]
    fn unbound_control_keys_are_ignored() {
        assert_eq!(command_for(&ctrl('z')), None);
        assert_eq!(command_for(&ctrl('a')), None);
    }

    #[test]
    fn arrows_and_editing_keys() {
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::Move(Direction::Up)));
        assert_eq!(command_for(&key(KeyCode::Enter)), Some(Command::Newline));
        assert_eq!(command_for(&key(KeyCode::Backspace)), Some(Command::Backspace));
    }

    #[test]
    fn printable_chars_insert_including_shifted() {
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::Insert('a')));
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(command_for(&shifted), Some(Command::Insert('A')));
        assert_eq!(command_for(&key(KeyCode::Char(' '))), Some(Command::Insert(' ')));
    }

    #[test]
    fn non_ascii_and_alt_chars_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('é'))), None);
        let alt = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(command_for(&alt), None);
        assert_eq!(command_for(&key(KeyCode::Tab)), None);
    }

    #[test]
    fn help_lists_every_control_command() {
        for label in ["Ctrl+E", "Ctrl+W", "Ctrl+O", "Ctrl+P", "Ctrl+T", "Ctrl+G", "Ctrl+N", "Ctrl+L", "Ctrl+K", "Ctrl+X"] {
            assert!(HELP_ENTRIES.iter().any(|(k, _)| *k == label), "{} missing", label);
        }
    }
}
