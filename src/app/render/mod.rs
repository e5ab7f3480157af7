//! Rendering methods for the App.
//!
//! - **Editor**: header, toolbar, text area and footer
//! - **Menu**: the floating block menu, drawn last so it sits on top

mod editor;
mod menu;

use ratatui::Frame;

use super::App;

impl App {
    /// Renders the editor and, if mounted, the command menu.
    ///
    /// Uses the layout cached by `update_layout()` for this frame.
    pub fn render(&self, frame: &mut Frame) {
        self.render_editor(frame);
        self.render_menu(frame);
    }
}
