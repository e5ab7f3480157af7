//! Editor widgets.

pub mod command_menu;
pub mod toolbar;

pub use command_menu::{CommandMenu, MAX_MENU_ROWS, MAX_MENU_WIDTH};
pub use toolbar::{Toolbar, ToolbarButton, ToolbarState};
