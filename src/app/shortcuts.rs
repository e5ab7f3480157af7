//! Keyboard shortcuts outside the command menu.
//!
//! Ctrl+I only reaches us as itself when the terminal supports keyboard
//! enhancement; elsewhere it arrives as Tab and is typed as such.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::widgets::ToolbarButton;

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Same as pressing a toolbar button.
    Toolbar(ToolbarButton),
    /// Leave the editor.
    Quit,
}

/// Maps a key chord to an editor action.
#[must_use]
pub fn action_for(key: &KeyEvent) -> Option<EditorAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let KeyCode::Char(c) = key.code else {
        return None;
    };

    let button = match (ctrl, alt, c.to_ascii_lowercase()) {
        (true, false, 'q' | 'c') => return Some(EditorAction::Quit),
        (true, false, 'b') => ToolbarButton::Bold,
        (true, false, 'i') => ToolbarButton::Italic,
        (true, false, 'z') if shift || c.is_ascii_uppercase() => ToolbarButton::Redo,
        (true, false, 'z') => ToolbarButton::Undo,
        (true, false, 'y') => ToolbarButton::Redo,
        (false, true, '1') => ToolbarButton::Heading1,
        (false, true, '2') => ToolbarButton::Heading2,
        (false, true, '8') => ToolbarButton::BulletList,
        (false, true, '7') => ToolbarButton::OrderedList,
        (false, true, 'q') => ToolbarButton::Blockquote,
        (false, true, 'c') => ToolbarButton::CodeBlock,
        (false, true, 't') => ToolbarButton::Table,
        _ => return None,
    };
    Some(EditorAction::Toolbar(button))
}
