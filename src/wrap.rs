//! Greedy word-wrap for a single overlong line.

/// Word-wraps `line` into pieces of at most `width` characters.
///
/// Breaks at the last space that still lets the piece fit, consuming that one
/// space. A word longer than `width` is hard-broken at `width`. A line that
/// already fits (or `width == 0`) comes back unchanged as a single piece.
///
/// Runs of spaces at a soft break are consumed whole, so no piece starts
/// or ends with a space left over from the break. Spaces at the start of an
/// overlong line are dropped.
///
/// When a soft break eats the final character the last piece is empty, so a
/// space typed at the margin leaves the cursor on a fresh line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || char_len(line) <= width {
        return vec![line.to_string()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut remaining: &[char] = &chars;
    let mut out = Vec::new();

    loop {
        if remaining.len() <= width {
            out.push(remaining.iter().collect());
            break;
        }

        // A space right after the `width`th char is still a valid break
        let search_region = &remaining[..=width];
        match search_region.iter().rposition(|&c| c == ' ') {
            Some(pos) => {
                // Break at the whole run of spaces around `pos`
                let start = remaining[..pos]
                    .iter()
                    .rposition(|&c| c != ' ')
                    .map_or(0, |i| i + 1);
                let end = pos + 1 + remaining[pos + 1..].iter().take_while(|&&c| c == ' ').count();
                // Spaces at the very start of the line are dropped, not emitted
                if start > 0 {
                    out.push(remaining[..start].iter().collect());
                }
                remaining = &remaining[end..];
            }
            None => {
                // No space found, force break at width
                out.push(remaining[..width].iter().collect());
                remaining = &remaining[width..];
            }
        }
    }

    out
}

/// Length of `s` in characters, the unit cursor columns are measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of character `col` in `s`, or `s.len()` past the end.
pub fn byte_index(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(idx, _)| idx)
}
