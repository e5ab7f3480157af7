//! Cursor position on screen.
//!
//! The textarea wraps long lines at the inner width and scrolls just enough
//! to keep the cursor visible. [`cursor_anchor`] mirrors that so the command
//! menu can hang off the cursor cell.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Visual `(row, col)` of the cursor with lines wrapped at `width` cells.
///
/// `row` counts visual rows from the top of the document.
#[must_use]
pub fn visual_cursor(lines: &[String], cursor: (usize, usize), width: usize) -> (usize, usize) {
    let width = if width == 0 { usize::MAX } else { width };
    let (cursor_row, cursor_col) = cursor;

    let mut visual_row = 0;
    for line in lines.iter().take(cursor_row) {
        visual_row += wrapped_rows(line, width);
    }

    let Some(line) = lines.get(cursor_row) else {
        return (visual_row, 0);
    };
    let mut col = 0;
    for ch in line.chars().take(cursor_col) {
        let w = ch.width().unwrap_or(1);
        if col + w > width && col > 0 {
            visual_row += 1;
            col = 0;
        }
        col += w;
    }
    if col >= width {
        visual_row += 1;
        col = 0;
    }
    (visual_row, col)
}

fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut col = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(1);
        if col + w > width && col > 0 {
            rows += 1;
            col = 0;
        }
        col += w;
    }
    rows
}

/// Returns the one-cell screen rectangle of the cursor inside `inner`.
///
/// The editor is drawn from a fresh textarea every frame, whose viewport
/// starts at the top and scrolls only until the cursor row is on screen.
/// The cursor therefore sits on the last visible row whenever the document
/// is scrolled.
///
/// Returns `None` when `inner` has no area, for example before the first
/// frame has been laid out.
#[must_use]
pub fn cursor_anchor(lines: &[String], cursor: (usize, usize), inner: Rect) -> Option<Rect> {
    if inner.is_empty() {
        return None;
    }
    let height = usize::from(inner.height);
    let (row, col) = visual_cursor(lines, cursor, usize::from(inner.width));
    let scroll_top = row.saturating_sub(height - 1);

    let visible_row = row - scroll_top;
    let x = inner.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
    let y = inner.y.saturating_add(u16::try_from(visible_row).unwrap_or(u16::MAX));
    Some(Rect::new(
        x.min(inner.right().saturating_sub(1)),
        y.min(inner.bottom().saturating_sub(1)),
        1,
        1,
    ))
}
