//! Layout calculation for the editor screen.
//!
//! Computed once per frame in `App::update_layout` and cached, so key
//! handling between frames (menu anchoring in particular) sees the same
//! rectangles the last frame was drawn with.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas of the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorLayout {
    /// Title line.
    pub header: Rect,
    /// Formatting toolbar.
    pub toolbar: Rect,
    /// Bordered text area.
    pub editor: Rect,
    /// Text area without its borders.
    pub editor_inner: Rect,
    /// Key hints and status.
    pub footer: Rect,
    /// Whole terminal.
    pub screen: Rect,
}

const EDITOR_LAYOUT_CONSTRAINTS: [Constraint; 4] = [
    Constraint::Length(1), // Header
    Constraint::Length(1), // Toolbar
    Constraint::Min(3),    // Editor (grows)
    Constraint::Length(1), // Footer
];

/// Splits the terminal into editor areas.
#[must_use]
pub fn calculate_editor_layout(area: Rect) -> EditorLayout {
    let chunks = Layout::vertical(EDITOR_LAYOUT_CONSTRAINTS).split(area);
    let editor = chunks[2];
    let editor_inner = Rect {
        x: editor.x.saturating_add(1),
        y: editor.y.saturating_add(1),
        width: editor.width.saturating_sub(2),
        height: editor.height.saturating_sub(2),
    };

    EditorLayout {
        header: chunks[0],
        toolbar: chunks[1],
        editor,
        editor_inner,
        footer: chunks[3],
        screen: area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_terminal() {
        let layout = calculate_editor_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.toolbar, Rect::new(0, 1, 80, 1));
        assert_eq!(layout.editor, Rect::new(0, 2, 80, 21));
        assert_eq!(layout.editor_inner, Rect::new(1, 3, 78, 19));
        assert_eq!(layout.footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let layout = calculate_editor_layout(Rect::new(0, 0, 1, 2));
        assert_eq!(layout.editor_inner.width, 0);
        assert_eq!(layout.editor_inner.height, 0);
    }

    #[test]
    fn default_layout_is_empty() {
        assert!(EditorLayout::default().editor_inner.is_empty());
    }
}
