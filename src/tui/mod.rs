//! TUI presentation layer.

pub mod overlay;
pub mod setup;
pub mod theme;
pub mod widgets;

pub use overlay::MenuOverlay;
pub use setup::TerminalEventGuard;
pub use theme::Theme;
