//! Slash command core: catalog, matching, navigation, menu lifecycle and dispatch.
//!
//! Nothing here knows about terminals beyond key events and screen
//! rectangles. The editor host plugs in through [`BlockEditor`] (where
//! edits land) and [`PopupSurface`] (where the menu is drawn).

pub mod commands;
pub mod controller;
pub mod dispatch;
pub mod popup;
pub mod suggestion;

pub use commands::{BUILTIN_COMMANDS, BlockCommand, CommandDescriptor, CommandRegistry};
pub use controller::{CloseReason, SuggestionController, SuggestionEvents, SuggestionProps};
pub use dispatch::{
    BlockEditor, BlockMutation, DispatchError, TableShape, TriggerRange, dispatch,
    dispatch_identifier, mutation_for,
};
pub use popup::{MenuView, PopupError, PopupHandle, PopupSurface, SharedSurface, SurfaceId};
pub use suggestion::{MenuKey, SuggestionState};
