//! The flat-file document format: a metadata header followed by the content.
//!
//! ```text
//! ::metadata::
//! g: 500
//! t: false
//! c: 2
//! ::end::
//! first content line
//! ...
//! ```
//!
//! Content lines are written verbatim with no escaping. The header always
//! comes first and ends at the first `::end::`, so a headerless file whose
//! first line reads `::metadata::` is taken for a header on load. Existing
//! files depend on this layout.

use std::io;
use std::path::{Path, PathBuf};

use crate::document::Metadata;
use crate::error::{Error, Result};

pub const METADATA_START: &str = "::metadata::";
pub const METADATA_END: &str = "::end::";

/// Extension of full documents.
pub const DOCUMENT_EXT: &str = ".txt";
/// Suffix (before the extension) of clean exports.
pub const EXPORT_SUFFIX: &str = "_clean";

/// Result of reading a document from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub lines: Vec<String>,
    pub meta: Metadata,
    /// False when the file did not exist and an empty document was returned.
    pub existed: bool,
}

// ─── Naming ─────────────────────────────────────────────────────────────

/// Strips surrounding whitespace and a trailing `.txt` from a typed name.
pub fn normalize_name(input: &str) -> String {
    let trimmed = input.trim();
    trimmed
        .strip_suffix(DOCUMENT_EXT)
        .unwrap_or(trimmed)
        .to_string()
}

/// `name` → `name.txt`
pub fn document_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", normalize_name(name), DOCUMENT_EXT))
}

/// `name` → `name_clean.txt`
pub fn export_path(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}{}{}",
        normalize_name(name),
        EXPORT_SUFFIX,
        DOCUMENT_EXT
    ))
}

// ─── Encoding ───────────────────────────────────────────────────────────

/// Serializes content and metadata into the document format.
pub fn encode(lines: &[String], meta: &Metadata) -> String {
    let mut out = String::new();
    out.push_str(METADATA_START);
    out.push('\n');
    out.push_str(&format!("g: {}\n", meta.goal));
    out.push_str(&format!("t: {}\n", meta.clock24h));
    for chapter in &meta.chapters {
        out.push_str(&format!("c: {}\n", chapter));
    }
    out.push_str(METADATA_END);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Parses the document format. Text without a leading `::metadata::` line is
/// all content. `default_clock24h` applies when the header has no `t` entry.
pub fn decode(text: &str, default_clock24h: bool) -> (Vec<String>, Metadata) {
    let mut meta = Metadata::with_clock(default_clock24h);
    let all: Vec<&str> = text.lines().collect();

    let mut content_start = 0;
    if all.first().map(|l| l.trim()) == Some(METADATA_START) {
        // Without a terminator every remaining line is header
        content_start = all.len();
        for (i, line) in all.iter().enumerate().skip(1) {
            let stripped = line.trim();
            if stripped == METADATA_END {
                content_start = i + 1;
                break;
            }
            if let Some((key, value)) = stripped.split_once(':') {
                apply_entry(&mut meta, key.trim(), value.trim());
            }
        }
    }

    let lines = all[content_start..]
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>();
    (non_empty(lines), meta)
}

/// Applies one `key: value` header entry. Unknown keys are ignored.
fn apply_entry(meta: &mut Metadata, key: &str, value: &str) {
    match key {
        "g" => meta.goal = value.parse().unwrap_or(0),
        "t" => meta.clock24h = value.eq_ignore_ascii_case("true"),
        "c" => {
            if let Ok(line) = value.parse() {
                meta.chapters.insert(line);
            }
        }
        _ => {}
    }
}

fn non_empty(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

// ─── File I/O ───────────────────────────────────────────────────────────

/// Reads a document. A missing file is a new, empty document rather than an
/// error.
pub fn load(path: &Path, default_clock24h: bool) -> Result<Loaded> {
    match read_optional(path)? {
        Some(text) => {
            let (lines, meta) = decode(&text, default_clock24h);
            tracing::info!(path = %path.display(), lines = lines.len(), chapters = meta.chapters.len(), "document loaded");
            Ok(Loaded {
                lines,
                meta,
                existed: true,
            })
        }
        None => {
            tracing::info!(path = %path.display(), "document not found, starting new");
            Ok(Loaded {
                lines: vec![String::new()],
                meta: Metadata::with_clock(default_clock24h),
                existed: false,
            })
        }
    }
}

/// Writes a document with its metadata header.
pub fn save(path: &Path, lines: &[String], meta: &Metadata) -> Result<()> {
    write(path, &encode(lines, meta))?;
    tracing::info!(path = %path.display(), lines = lines.len(), "document saved");
    Ok(())
}

/// Writes the content alone, with no metadata header.
pub fn export(path: &Path, lines: &[String]) -> Result<()> {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    write(path, &out)?;
    tracing::info!(path = %path.display(), lines = lines.len(), "clean copy exported");
    Ok(())
}

/// Reads a plain text file as content only; header lines are not
/// interpreted. A missing file yields an empty document with `existed`
/// false, like [`load`].
pub fn import(path: &Path, default_clock24h: bool) -> Result<Loaded> {
    let (lines, existed): (Vec<String>, bool) = match read_optional(path)? {
        Some(text) => (text.lines().map(String::from).collect(), true),
        None => (Vec::new(), false),
    };
    tracing::info!(path = %path.display(), lines = lines.len(), existed, "plain text imported");
    Ok(Loaded {
        lines: non_empty(lines),
        meta: Metadata::with_clock(default_clock24h),
        existed,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
