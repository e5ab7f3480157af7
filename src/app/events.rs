//! Key and paste handling.

use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::trace;

use crate::app::{App, EditorAction, action_for};
use crate::core::{BlockMutation, CloseReason, SuggestionEvents};
use crate::document::InlineMark;
use crate::tui::widgets::ToolbarButton;

impl App {
    /// Handles a key event.
    ///
    /// Key event priorities:
    /// 1. The open command menu (navigation, confirm, cancel)
    /// 2. Shortcuts (formatting, undo, quit)
    /// 3. The text buffer
    ///
    /// Every path ends by re-syncing the trigger under the cursor.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        trace!(code = ?key.code, modifiers = ?key.modifiers, "key");

        // Priority 1: the open menu sees keys before the text buffer
        let open_range = self.controller.range();
        if self.controller.on_key_event(&key, &mut self.document) {
            if let Some(range) = open_range
                && !self.controller.is_open()
                && self.controller.last_close_reason() == Some(CloseReason::Cancelled)
            {
                self.remember_dismissal(range.row, range.start_col);
            }
            self.status = None;
            self.sync_suggestion();
            return;
        }

        // Priority 2: shortcuts
        if let Some(action) = action_for(&key) {
            match action {
                EditorAction::Quit => self.quit(),
                EditorAction::Toolbar(button) => self.apply_toolbar(button),
            }
            self.sync_suggestion();
            return;
        }

        // Priority 3: text buffer
        if self.document.input(key) {
            self.status = None;
        }
        self.sync_suggestion();
    }

    /// Handles a bracketed paste.
    pub fn handle_paste(&mut self, text: &str) {
        if self.document.insert_text(text) {
            self.status = None;
        }
        self.sync_suggestion();
    }

    /// Runs a toolbar action on the document.
    pub(crate) fn apply_toolbar(&mut self, button: ToolbarButton) {
        let table = self.settings.table_shape();
        match button {
            ToolbarButton::Bold => self.document.toggle_mark(InlineMark::Bold),
            ToolbarButton::Italic => self.document.toggle_mark(InlineMark::Italic),
            ToolbarButton::Heading1 => self.document.toggle_heading(1),
            ToolbarButton::Heading2 => self.document.toggle_heading(2),
            ToolbarButton::BulletList => {
                self.document.apply_at_cursor(BlockMutation::ToggleBulletList);
            }
            ToolbarButton::OrderedList => {
                self.document.apply_at_cursor(BlockMutation::ToggleOrderedList);
            }
            ToolbarButton::Blockquote => {
                self.document.apply_at_cursor(BlockMutation::ToggleBlockquote);
            }
            ToolbarButton::CodeBlock => {
                self.document.apply_at_cursor(BlockMutation::ToggleCodeBlock);
            }
            ToolbarButton::Table => self.document.apply_at_cursor(BlockMutation::InsertTable(table)),
            ToolbarButton::Undo => {
                if !self.document.undo() {
                    self.status = Some("Nothing to undo".to_string());
                }
            }
            ToolbarButton::Redo => {
                if !self.document.redo() {
                    self.status = Some("Nothing to redo".to_string());
                }
            }
        }
    }
}
