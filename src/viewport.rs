/// Returns the scroll offset that keeps `cursor_row` inside a window of
/// `height` rows over a buffer of `total_lines` lines.
///
/// Scrolls up when the cursor is above `offset`, down when it is below the
/// last visible row, then clamps to `[0, total_lines - height]`.
pub fn scroll_offset(cursor_row: usize, offset: usize, height: usize, total_lines: usize) -> usize {
    let mut offset = offset;
    if height > 0 {
        if cursor_row < offset {
            offset = cursor_row;
        } else if cursor_row >= offset + height {
            offset = cursor_row + 1 - height;
        }
    }
    offset.min(total_lines.saturating_sub(height))
}
