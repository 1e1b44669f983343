use std::io;
use std::path::PathBuf;

/// Errors surfaced by document commands. None of them end the session;
/// the app turns each one into a status bar message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a document or import source failed for a reason other than
    /// the file not existing.
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing a document or export failed. The document stays dirty.
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Save was requested before the document had a name.
    #[error("No filename set. Use Save As (Ctrl+E) first.")]
    Untitled,

    /// Prompt input that should have been a non-negative integer.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Jump target outside the buffer (1-based `line`).
    #[error("Line {line} is out of range (1-{total})")]
    LineOutOfRange { line: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parses prompt input as a non-negative integer.
pub fn parse_number(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| Error::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_padded_digits() {
        assert_eq!(parse_number(" 42 ").unwrap(), 42);
    }

    #[test]
    fn parse_number_rejects_negative_and_text() {
        assert!(matches!(parse_number("-3"), Err(Error::InvalidNumber(_))));
        assert!(matches!(parse_number("ten"), Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn untitled_message_points_at_save_as() {
        assert!(Error::Untitled.to_string().contains("Ctrl+E"));
    }
}
