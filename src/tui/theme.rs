//! Editor colors and styles.

use ratatui::style::{Color, Modifier, Style};

/// Colors shared by every editor widget.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text.
    pub fg: Color,
    /// Titles, selected menu rows, active toolbar buttons.
    pub accent: Color,
    /// Warnings in the status line.
    pub warning: Color,
    /// Secondary text: descriptions, hints, disabled buttons.
    pub muted: Color,
    /// Borders.
    pub border: Color,
    /// Background of the selected menu row.
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::Gray,
            selection_bg: Color::DarkGray,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for key hints and highlighted text.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row of the command menu.
    #[must_use]
    pub fn selected_item_style(&self) -> Style {
        self.highlight_style().bg(self.selection_bg)
    }

    /// Style for a toolbar button whose format is active at the cursor.
    #[must_use]
    pub fn toolbar_active_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a toolbar button that cannot be used right now.
    #[must_use]
    pub fn toolbar_disabled_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::DIM)
    }

    /// Style for placeholder text (visible on both light and dark backgrounds).
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }
}
