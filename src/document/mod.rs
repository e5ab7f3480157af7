//! The editable Markdown document.
//!
//! [`Document`] wraps a `tui-textarea` buffer and owns undo history. The
//! textarea's own history is disabled: every edit goes through
//! [`Document::input`], [`Document::insert_text`] or a block edit, which
//! record snapshots here so that a block command undoes in one step.

pub mod blocks;
pub mod history;
pub mod trigger;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;
use tui_textarea::{CursorMove, TextArea};

use crate::core::dispatch::{BlockEditor, BlockMutation, TriggerRange};

pub use blocks::{BlockEdit, BlockKind, InlineMark};
pub use history::{EditKind, History, Snapshot};
pub use trigger::{TriggerToken, detect_trigger};

/// Document shown on first launch when no file is given.
pub const WELCOME_DOCUMENT: &str = "\
# Welcome to slashpad

Type / at the start of a line or after a space to open the command menu.

## Getting started

- Use the arrow keys to pick a block type
- Press Enter or Tab to apply it
- Press Esc to dismiss the menu

> Tip: keep typing after / to filter the list, e.g. /head for headings.
";

/// A Markdown buffer with snapshot undo.
#[derive(Debug)]
pub struct Document {
    textarea: TextArea<'static>,
    placeholder: String,
    history: History,
}

impl Document {
    /// Creates a document from lines with the cursor at the top.
    #[must_use]
    pub fn new(lines: Vec<String>, placeholder: &str) -> Self {
        Self {
            textarea: Self::build_textarea(lines, (0, 0), placeholder),
            placeholder: placeholder.to_string(),
            history: History::default(),
        }
    }

    /// Creates a document from text, splitting on newlines.
    ///
    /// A single trailing newline does not produce an extra empty line.
    #[must_use]
    pub fn from_text(text: &str, placeholder: &str) -> Self {
        let text = text.replace("\r\n", "\n");
        let text = text.strip_suffix('\n').unwrap_or(&text);
        Self::new(text.split('\n').map(String::from).collect(), placeholder)
    }

    fn build_textarea(lines: Vec<String>, cursor: (usize, usize), placeholder: &str) -> TextArea<'static> {
        let mut textarea = TextArea::new(lines);
        textarea.set_placeholder_text(placeholder);
        textarea.set_max_histories(0);
        textarea.move_cursor(CursorMove::Top);
        for _ in 0..cursor.0 {
            textarea.move_cursor(CursorMove::Down);
        }
        textarea.move_cursor(CursorMove::Head);
        for _ in 0..cursor.1 {
            textarea.move_cursor(CursorMove::Forward);
        }
        textarea
    }

    /// Returns the lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Returns the cursor as `(row, col)` in characters.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Returns the whole document joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    /// Returns true if the document holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().iter().all(String::is_empty)
    }

    /// Returns the underlying textarea for rendering.
    #[must_use]
    pub const fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            lines: self.lines().to_vec(),
            cursor: self.cursor(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.textarea = Self::build_textarea(snapshot.lines, snapshot.cursor, &self.placeholder);
    }

    /// Replaces the contents as one undo step. Cursor-only edits are not recorded.
    fn commit(&mut self, edit: BlockEdit) {
        let before = self.snapshot();
        if before.lines == edit.lines {
            if before.cursor != edit.cursor {
                self.restore(Snapshot {
                    lines: edit.lines,
                    cursor: edit.cursor,
                });
            }
            return;
        }
        self.history.record(before, EditKind::Other);
        self.restore(Snapshot {
            lines: edit.lines,
            cursor: edit.cursor,
        });
    }

    /// Feeds a key to the text buffer. Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.snapshot();
        let modified = self.textarea.input(key);
        if modified {
            self.history.record(before, edit_kind(&key));
        } else {
            self.history.break_group();
        }
        modified
    }

    /// Inserts text at the cursor as one undo step.
    ///
    /// Line endings are normalised and control characters other than
    /// newlines are dropped.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let filtered: String = normalized
            .chars()
            .filter(|c| !c.is_control() || *c == '\n')
            .collect();
        if filtered.is_empty() {
            return false;
        }
        let before = self.snapshot();
        self.textarea.insert_str(&filtered);
        self.history.record(before, EditKind::Other);
        true
    }

    /// Restores the previous undo step.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone step.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns the block kind under the cursor.
    #[must_use]
    pub fn block_kind(&self) -> BlockKind {
        blocks::block_kind_at(self.lines(), self.cursor().0)
    }

    /// Returns true if `mark` is open at the cursor.
    #[must_use]
    pub fn mark_active(&self, mark: InlineMark) -> bool {
        let (row, col) = self.cursor();
        self.lines()
            .get(row)
            .is_some_and(|line| blocks::mark_active(line, col, mark))
    }

    /// Wraps the selection in `mark`, or inserts an empty pair at the cursor.
    ///
    /// Selections spanning several lines fall back to the cursor position.
    pub fn toggle_mark(&mut self, mark: InlineMark) {
        let (row, col) = self.cursor();
        let (start, end) = match self.textarea.selection_range() {
            Some(((r1, c1), (r2, c2))) if r1 == r2 => (c1, c2),
            _ => (col, col),
        };
        let edit = blocks::wrap_mark(self.lines(), row, start, end, mark);
        self.commit(edit);
    }

    /// Toggles a heading of `level` on the cursor line.
    pub fn toggle_heading(&mut self, level: u8) {
        let edit = blocks::toggle_heading(self.lines(), self.cursor(), level);
        self.commit(edit);
    }

    /// Applies `mutation` at the cursor without deleting anything first.
    pub fn apply_at_cursor(&mut self, mutation: BlockMutation) {
        let edit = blocks::apply_mutation(self.lines(), self.cursor(), mutation);
        self.commit(edit);
    }

    /// Returns the trigger token ending at the cursor, if any.
    #[must_use]
    pub fn trigger(&self, trigger: char) -> Option<TriggerToken> {
        let (row, col) = self.cursor();
        detect_trigger(self.lines(), row, col, trigger)
    }
}

impl BlockEditor for Document {
    fn apply_block_mutation(&mut self, range: TriggerRange, mutation: BlockMutation) {
        trace!(?range, ?mutation, "applying block mutation");
        let lines = blocks::delete_span(self.lines(), range.row, range.start_col, range.end_col);
        let edit = blocks::apply_mutation(&lines, (range.row, range.start_col), mutation);
        self.commit(edit);
    }
}

fn edit_kind(key: &KeyEvent) -> EditKind {
    let modified = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if !modified && !c.is_whitespace() => EditKind::Typing,
        _ => EditKind::Other,
    }
}
