//! Snapshot undo and redo.
//!
//! Each undo step is a full copy of the lines and cursor. Consecutive word
//! characters typed without moving the cursor elsewhere share one step, so
//! undo removes a word at a time. Block edits always get their own step.

/// Most undo steps kept.
pub const MAX_HISTORY: usize = 200;

/// Document contents plus cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// All lines.
    pub lines: Vec<String>,
    /// Cursor `(row, col)` in characters.
    pub cursor: (usize, usize),
}

/// What kind of edit produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// A word character typed in place. Groups with the previous one.
    Typing,
    /// Anything else: whitespace, deletion, paste, block edits.
    Other,
}

/// Undo and redo stacks.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    typing: bool,
}

impl History {
    /// Records the state from before an edit.
    pub fn record(&mut self, before: Snapshot, kind: EditKind) {
        self.redo.clear();
        let grouped = kind == EditKind::Typing && self.typing;
        self.typing = kind == EditKind::Typing;
        if grouped {
            return;
        }
        self.undo.push(before);
        if self.undo.len() > MAX_HISTORY {
            self.undo.remove(0);
        }
    }

    /// Ends the current typing group without recording anything.
    pub fn break_group(&mut self) {
        self.typing = false;
    }

    /// Pops the previous state, stashing `current` for redo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        self.typing = false;
        Some(previous)
    }

    /// Pops the next state, stashing `current` for undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        self.typing = false;
        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
