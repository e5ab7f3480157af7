//! Keyboard navigation over the filtered suggestion list.
//!
//! [`SuggestionState`] holds the current matches and a selection cursor that
//! wraps in both directions. [`MenuKey`] is the logical view of a terminal
//! key while the menu is open.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::commands::CommandDescriptor;

/// Logical keys the open menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Move the selection up, wrapping to the last item.
    Previous,
    /// Move the selection down, wrapping to the first item.
    Next,
    /// Run the selected command.
    Confirm,
    /// Close the menu without running anything.
    Cancel,
    /// Anything else; left for the text buffer.
    Other,
}

impl MenuKey {
    /// Classifies a terminal key event.
    ///
    /// Up / Ctrl+P and Down / Ctrl+N navigate, Enter and Tab confirm, Esc
    /// cancels. Modified arrows and Enter (e.g. Shift+Enter) are left alone.
    #[must_use]
    pub fn from_key_event(key: &KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up if key.modifiers.is_empty() => Self::Previous,
            KeyCode::Down if key.modifiers.is_empty() => Self::Next,
            KeyCode::Char('p') if ctrl => Self::Previous,
            KeyCode::Char('n') if ctrl => Self::Next,
            KeyCode::Enter | KeyCode::Tab if key.modifiers.is_empty() => Self::Confirm,
            KeyCode::Esc => Self::Cancel,
            _ => Self::Other,
        }
    }
}

/// Filtered items plus the selected index.
///
/// Whenever `items` is non-empty, `selected < items.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    items: Vec<CommandDescriptor>,
    selected: usize,
}

impl SuggestionState {
    /// Creates a state over `items` with the first item selected.
    #[must_use]
    pub fn new(items: Vec<CommandDescriptor>) -> Self {
        Self { items, selected: 0 }
    }

    /// Replaces the items and resets the selection to the first one.
    pub fn replace_items(&mut self, items: Vec<CommandDescriptor>) {
        self.items = items;
        self.selected = 0;
    }

    /// Returns the filtered items in display order.
    #[must_use]
    pub fn items(&self) -> &[CommandDescriptor] {
        &self.items
    }

    /// Returns the selected index.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&CommandDescriptor> {
        self.items.get(self.selected)
    }

    /// Returns true if there is nothing to select.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Moves the selection up one item, wrapping from the first to the last.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Moves the selection down one item, wrapping from the last to the first.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 >= self.items.len() {
            0
        } else {
            self.selected + 1
        };
    }
}
