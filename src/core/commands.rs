//! Block command registry for the slash palette.
//!
//! This module defines the fixed, ordered set of block commands that the
//! `/` palette offers, and the matcher that filters them while the user
//! types.
//!
//! ## Architecture
//!
//! - [`BlockCommand`] is the closed set of document mutations the palette can trigger
//! - [`CommandDescriptor`] pairs a command with its display title and description
//! - [`CommandRegistry`] holds descriptors in display order and filters them
//!
//! Registry order is the display order. Filtering is a stable substring
//! filter, so matches always appear in the same relative order as the full
//! list.

use std::fmt;
use std::str::FromStr;

use crate::core::dispatch::DispatchError;

/// A block-level command the palette can apply to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCommand {
    /// Large section heading.
    Heading1,
    /// Medium section heading.
    Heading2,
    /// Small section heading.
    Heading3,
    /// Bullet list item.
    BulletList,
    /// Numbered list item.
    OrderedList,
    /// Checkbox list item.
    TaskList,
    /// Fenced code block.
    CodeBlock,
    /// Blockquote.
    Blockquote,
    /// Horizontal divider.
    HorizontalRule,
    /// Markdown table.
    Table,
}

impl BlockCommand {
    /// Every command, in registry order.
    pub const ALL: [BlockCommand; 10] = [
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::BulletList,
        Self::OrderedList,
        Self::TaskList,
        Self::CodeBlock,
        Self::Blockquote,
        Self::HorizontalRule,
        Self::Table,
    ];

    /// Returns the stable identifier used to refer to this command.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::BulletList => "bulletList",
            Self::OrderedList => "orderedList",
            Self::TaskList => "taskList",
            Self::CodeBlock => "codeBlock",
            Self::Blockquote => "blockquote",
            Self::HorizontalRule => "horizontalRule",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for BlockCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for BlockCommand {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.identifier() == s)
            .ok_or_else(|| DispatchError::UnknownCommand(s.to_string()))
    }
}

/// A palette entry: what the user sees and which command it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Title shown in the menu and matched against the query.
    pub title: &'static str,
    /// The command this entry runs.
    pub command: BlockCommand,
    /// One-line description shown next to the title.
    pub description: &'static str,
}

impl CommandDescriptor {
    /// Returns the identifier of the command this entry runs.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        self.command.identifier()
    }
}

/// The block commands offered by the menu, in display order.
pub const BUILTIN_COMMANDS: [CommandDescriptor; 10] = [
    CommandDescriptor {
        title: "Heading 1",
        command: BlockCommand::Heading1,
        description: "Large section heading",
    },
    CommandDescriptor {
        title: "Heading 2",
        command: BlockCommand::Heading2,
        description: "Medium section heading",
    },
    CommandDescriptor {
        title: "Heading 3",
        command: BlockCommand::Heading3,
        description: "Small section heading",
    },
    CommandDescriptor {
        title: "Bullet List",
        command: BlockCommand::BulletList,
        description: "Create a simple bullet list",
    },
    CommandDescriptor {
        title: "Numbered List",
        command: BlockCommand::OrderedList,
        description: "Create a numbered list",
    },
    CommandDescriptor {
        title: "Task List",
        command: BlockCommand::TaskList,
        description: "Create a todo list with checkboxes",
    },
    CommandDescriptor {
        title: "Code Block",
        command: BlockCommand::CodeBlock,
        description: "Add a code snippet with syntax highlighting",
    },
    CommandDescriptor {
        title: "Quote",
        command: BlockCommand::Blockquote,
        description: "Add a blockquote",
    },
    CommandDescriptor {
        title: "Divider",
        command: BlockCommand::HorizontalRule,
        description: "Add a horizontal divider",
    },
    CommandDescriptor {
        title: "Table",
        command: BlockCommand::Table,
        description: "Insert a table",
    },
];

/// Ordered registry of palette commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Creates a registry from an explicit descriptor list.
    ///
    /// The given order becomes the display order.
    #[must_use]
    pub fn new(commands: Vec<CommandDescriptor>) -> Self {
        Self { commands }
    }

    /// Creates a registry with the built-in block commands.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new(BUILTIN_COMMANDS.to_vec())
    }

    /// Returns every registered command in display order.
    #[must_use]
    pub fn list_commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Finds a descriptor by command identifier.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&CommandDescriptor> {
        self.commands
            .iter()
            .find(|cmd| cmd.identifier() == identifier)
    }

    /// Returns the commands whose title contains `query`, ignoring case.
    ///
    /// An empty query returns the whole registry. Matches keep registry
    /// order; there is no relevance ranking.
    #[must_use]
    pub fn matching(&self, query: &str) -> Vec<CommandDescriptor> {
        let needle = query.to_lowercase();
        self.commands
            .iter()
            .filter(|cmd| cmd.title.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
