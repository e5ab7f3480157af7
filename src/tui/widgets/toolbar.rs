//! Formatting toolbar.
//!
//! One row of buttons showing which formats are active at the cursor. The
//! buttons are not clickable; each shows the shortcut that triggers it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::document::BlockKind;
use crate::tui::Theme;

/// A toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Bold,
    Italic,
    Heading1,
    Heading2,
    BulletList,
    OrderedList,
    Blockquote,
    CodeBlock,
    Table,
    Undo,
    Redo,
}

impl ToolbarButton {
    /// Buttons in display order.
    pub const ALL: [Self; 11] = [
        Self::Bold,
        Self::Italic,
        Self::Heading1,
        Self::Heading2,
        Self::BulletList,
        Self::OrderedList,
        Self::Blockquote,
        Self::CodeBlock,
        Self::Table,
        Self::Undo,
        Self::Redo,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Heading1 => "H1",
            Self::Heading2 => "H2",
            Self::BulletList => "•",
            Self::OrderedList => "1.",
            Self::Blockquote => "❝",
            Self::CodeBlock => "</>",
            Self::Table => "▦",
            Self::Undo => "↶",
            Self::Redo => "↷",
        }
    }

    /// Human-readable shortcut shown in the footer help.
    #[must_use]
    pub const fn shortcut(self) -> &'static str {
        match self {
            Self::Bold => "Ctrl+B",
            Self::Italic => "Ctrl+I",
            Self::Heading1 => "Alt+1",
            Self::Heading2 => "Alt+2",
            Self::BulletList => "Alt+8",
            Self::OrderedList => "Alt+7",
            Self::Blockquote => "Alt+Q",
            Self::CodeBlock => "Alt+C",
            Self::Table => "Alt+T",
            Self::Undo => "Ctrl+Z",
            Self::Redo => "Ctrl+Y",
        }
    }
}

/// Formatting state at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarState {
    pub bold: bool,
    pub italic: bool,
    pub block: BlockKind,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            block: BlockKind::Paragraph,
            can_undo: false,
            can_redo: false,
        }
    }
}

impl ToolbarState {
    /// Returns true if the button's format applies at the cursor.
    #[must_use]
    pub fn is_active(&self, button: ToolbarButton) -> bool {
        match button {
            ToolbarButton::Bold => self.bold,
            ToolbarButton::Italic => self.italic,
            ToolbarButton::Heading1 => self.block == BlockKind::Heading(1),
            ToolbarButton::Heading2 => self.block == BlockKind::Heading(2),
            ToolbarButton::BulletList => self.block == BlockKind::BulletList,
            ToolbarButton::OrderedList => self.block == BlockKind::OrderedList,
            ToolbarButton::Blockquote => self.block == BlockKind::Blockquote,
            ToolbarButton::CodeBlock => self.block == BlockKind::CodeBlock,
            ToolbarButton::Table => self.block == BlockKind::TableRow,
            ToolbarButton::Undo | ToolbarButton::Redo => false,
        }
    }

    /// Returns false for undo and redo when there is nothing to do.
    #[must_use]
    pub const fn is_enabled(&self, button: ToolbarButton) -> bool {
        match button {
            ToolbarButton::Undo => self.can_undo,
            ToolbarButton::Redo => self.can_redo,
            _ => true,
        }
    }
}

/// Widget rendering the toolbar row.
#[derive(Debug)]
pub struct Toolbar<'a> {
    state: ToolbarState,
    theme: &'a Theme,
}

impl<'a> Toolbar<'a> {
    #[must_use]
    pub const fn new(state: ToolbarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(ToolbarButton::ALL.len() * 2 + 2);
        spans.push(Span::raw(" "));
        for button in ToolbarButton::ALL {
            if button == ToolbarButton::Undo {
                spans.push(Span::styled("│ ", self.theme.border_style()));
            }
            let style = if !self.state.is_enabled(button) {
                self.theme.toolbar_disabled_style()
            } else if self.state.is_active(button) {
                self.theme.toolbar_active_style()
            } else {
                self.theme.normal_style()
            };
            spans.push(Span::styled(format!(" {} ", button.label()), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn active_buttons_follow_block_kind() {
        let state = ToolbarState {
            block: BlockKind::Heading(2),
            bold: true,
            ..ToolbarState::default()
        };
        assert!(state.is_active(ToolbarButton::Heading2));
        assert!(!state.is_active(ToolbarButton::Heading1));
        assert!(state.is_active(ToolbarButton::Bold));
        assert!(!state.is_active(ToolbarButton::Italic));
    }

    #[test]
    fn undo_redo_enabled_from_history() {
        let state = ToolbarState {
            can_undo: true,
            ..ToolbarState::default()
        };
        assert!(state.is_enabled(ToolbarButton::Undo));
        assert!(!state.is_enabled(ToolbarButton::Redo));
        assert!(state.is_enabled(ToolbarButton::Table));
    }

    #[test]
    fn renders_active_button_with_accent_background() -> Result<()> {
        let theme = Theme::default();
        let state = ToolbarState {
            block: BlockKind::BulletList,
            ..ToolbarState::default()
        };
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend)?;
        terminal.draw(|frame| {
            frame.render_widget(Toolbar::new(state, &theme), frame.area());
        })?;

        let buffer = terminal.backend().buffer();
        let bullet_x = (0..60)
            .find(|&x| buffer[(x, 0)].symbol() == "•")
            .expect("bullet button rendered");
        assert_eq!(buffer[(bullet_x, 0)].bg, theme.accent);

        let bold_x = (0..60)
            .find(|&x| buffer[(x, 0)].symbol() == "B")
            .expect("bold button rendered");
        assert_ne!(buffer[(bold_x, 0)].bg, theme.accent);
        Ok(())
    }

    #[test]
    fn every_button_has_a_shortcut() {
        for button in ToolbarButton::ALL {
            assert!(!button.shortcut().is_empty());
            assert!(!button.label().is_empty());
        }
    }
}
