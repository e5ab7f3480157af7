//! Command dispatch: turning a chosen palette entry into a document edit.
//!
//! Every [`BlockCommand`] maps to exactly one [`BlockMutation`]. The host
//! applies the mutation through [`BlockEditor`], replacing the trigger range
//! (`/` up to the cursor) in a single edit so the typed query never survives
//! as stray text.

use thiserror::Error;
use tracing::{debug, error};

use crate::core::commands::BlockCommand;

/// Errors raised while dispatching a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The identifier does not name any known block command.
    #[error("unknown block command: {0}")]
    UnknownCommand(String),
}

/// The span of a live suggestion on a single line, in character columns.
///
/// `start_col` is the column of the trigger character and `end_col` is the
/// cursor column (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerRange {
    /// Line index holding the trigger.
    pub row: usize,
    /// Column of the trigger character.
    pub start_col: usize,
    /// Column just past the query (the cursor).
    pub end_col: usize,
}

/// Dimensions of an inserted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    /// Total rows, including the header row when present.
    pub rows: usize,
    /// Columns per row.
    pub cols: usize,
    /// Whether the first row is a header row.
    pub header_row: bool,
}

impl Default for TableShape {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            header_row: true,
        }
    }
}

/// A block-level document mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMutation {
    /// Make the line a heading of the given level (1-3).
    SetHeading(u8),
    /// Toggle a `- ` bullet prefix.
    ToggleBulletList,
    /// Toggle a `1. ` numbered prefix.
    ToggleOrderedList,
    /// Toggle a `- [ ] ` task prefix.
    ToggleTaskList,
    /// Wrap the line in code fences, or unwrap it.
    ToggleCodeBlock,
    /// Toggle a `> ` quote prefix.
    ToggleBlockquote,
    /// Replace the line with a divider.
    InsertHorizontalRule,
    /// Insert a table of the given shape.
    InsertTable(TableShape),
}

/// The document side of a dispatch.
pub trait BlockEditor {
    /// Deletes `range` and applies `mutation` to the line that held it,
    /// as one undoable edit.
    fn apply_block_mutation(&mut self, range: TriggerRange, mutation: BlockMutation);
}

/// Returns the mutation a command performs.
#[must_use]
pub const fn mutation_for(command: BlockCommand, table: TableShape) -> BlockMutation {
    match command {
        BlockCommand::Heading1 => BlockMutation::SetHeading(1),
        BlockCommand::Heading2 => BlockMutation::SetHeading(2),
        BlockCommand::Heading3 => BlockMutation::SetHeading(3),
        BlockCommand::BulletList => BlockMutation::ToggleBulletList,
        BlockCommand::OrderedList => BlockMutation::ToggleOrderedList,
        BlockCommand::TaskList => BlockMutation::ToggleTaskList,
        BlockCommand::CodeBlock => BlockMutation::ToggleCodeBlock,
        BlockCommand::Blockquote => BlockMutation::ToggleBlockquote,
        BlockCommand::HorizontalRule => BlockMutation::InsertHorizontalRule,
        BlockCommand::Table => BlockMutation::InsertTable(table),
    }
}

/// Applies `command` over `range` in `editor`.
pub fn dispatch(
    command: BlockCommand,
    range: TriggerRange,
    table: TableShape,
    editor: &mut dyn BlockEditor,
) {
    let mutation = mutation_for(command, table);
    debug!(%command, ?range, ?mutation, "dispatching block command");
    editor.apply_block_mutation(range, mutation);
}

/// Resolves `identifier` and applies the command it names.
///
/// # Errors
///
/// Returns [`DispatchError::UnknownCommand`] if no command has that
/// identifier. The document is left untouched in that case.
pub fn dispatch_identifier(
    identifier: &str,
    range: TriggerRange,
    table: TableShape,
    editor: &mut dyn BlockEditor,
) -> Result<(), DispatchError> {
    let command: BlockCommand = identifier
        .parse()
        .inspect_err(|e| error!(%e, "dispatch rejected"))?;
    dispatch(command, range, table, editor);
    Ok(())
}
