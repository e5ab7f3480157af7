//! Editor application state.
//!
//! [`App`] glues the [`Document`] to the suggestion controller and the
//! terminal:
//!
//! - `events` routes keys: open menu first, then shortcuts, then the text buffer
//! - `render` draws header, toolbar, editor, footer and the floating menu
//! - `cursor` maps the text cursor to a screen cell for menu anchoring
//! - `shortcuts` maps key chords to toolbar actions
//!
//! After every edit the app re-detects the trigger under the cursor and
//! reports it to the controller as start, update or end.

pub mod events;
mod cursor;
mod layout;
mod render;
pub mod shortcuts;

#[cfg(test)]
mod tests;

pub use cursor::{cursor_anchor, visual_cursor};
pub use layout::{EditorLayout, calculate_editor_layout};
pub use shortcuts::{EditorAction, action_for};

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use tracing::debug;

use crate::core::{
    CommandRegistry, SharedSurface, SuggestionController, SuggestionEvents, SuggestionProps,
};
use crate::document::{Document, InlineMark, TriggerToken, WELCOME_DOCUMENT};
use crate::fs::EditorSettings;
use crate::tui::widgets::ToolbarState;
use crate::tui::{MenuOverlay, Theme};

/// Main application state.
pub struct App {
    /// The Markdown being edited.
    pub(crate) document: Document,
    /// Slash menu lifecycle.
    pub(crate) controller: SuggestionController,
    /// Where the controller mounts the menu; read by the render pass.
    pub(crate) overlay: Rc<RefCell<MenuOverlay>>,
    pub(crate) settings: EditorSettings,
    pub(crate) theme: Theme,
    /// Layout of the last frame.
    pub(crate) layout: EditorLayout,
    /// Shown in the header.
    pub(crate) title: String,
    /// Last warning to show in the footer.
    pub(crate) status: Option<String>,
    /// `(row, start_col)` of a trigger closed with Esc. It stays closed until
    /// the cursor leaves that trigger.
    dismissed: Option<(usize, usize)>,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("title", &self.title)
            .field("controller", &self.controller)
            .field("dismissed", &self.dismissed)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates the editor.
    ///
    /// `text` is the initial document; `None` opens the welcome document.
    #[must_use]
    pub fn new(settings: EditorSettings, text: Option<&str>, title: &str) -> Self {
        let document = Document::from_text(text.unwrap_or(WELCOME_DOCUMENT), &settings.placeholder);
        let overlay = Rc::new(RefCell::new(MenuOverlay::new()));
        let surface: SharedSurface = overlay.clone();
        let controller = SuggestionController::new(
            CommandRegistry::with_builtins(),
            surface,
            settings.table_shape(),
        );

        Self {
            document,
            controller,
            overlay,
            settings,
            theme: Theme::default(),
            layout: EditorLayout::default(),
            title: title.to_string(),
            status: None,
            dismissed: None,
            should_quit: false,
        }
    }

    /// Whether the main loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn quit(&mut self) {
        debug!("quit requested");
        self.should_quit = true;
    }

    /// The document being edited.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// The slash menu controller.
    #[must_use]
    pub const fn controller(&self) -> &SuggestionController {
        &self.controller
    }

    /// Returns the document text.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Recomputes the layout for this frame's terminal size.
    ///
    /// Must be called inside the draw closure, before [`App::render`].
    pub fn update_layout(&mut self, terminal_area: Rect) {
        let layout = calculate_editor_layout(terminal_area);
        if layout != self.layout {
            self.layout = layout;
            // The menu may need to move with the cursor cell.
            if self.controller.is_open() {
                self.sync_suggestion();
            }
        }
    }

    /// Formatting state at the cursor, for the toolbar.
    pub(crate) fn toolbar_state(&self) -> ToolbarState {
        ToolbarState {
            bold: self.document.mark_active(InlineMark::Bold),
            italic: self.document.mark_active(InlineMark::Italic),
            block: self.document.block_kind(),
            can_undo: self.document.can_undo(),
            can_redo: self.document.can_redo(),
        }
    }

    fn props_for(&self, token: TriggerToken) -> SuggestionProps {
        let anchor = cursor_anchor(
            self.document.lines(),
            self.document.cursor(),
            self.layout.editor_inner,
        );
        SuggestionProps {
            query: token.query,
            range: token.range,
            anchor,
        }
    }

    /// Reports the trigger under the cursor to the controller.
    pub(crate) fn sync_suggestion(&mut self) {
        let token = self.document.trigger(self.settings.trigger_char);
        let key = token.as_ref().map(|t| (t.range.row, t.range.start_col));

        if self.dismissed.is_some() && self.dismissed != key {
            self.dismissed = None;
        }

        match token {
            Some(_) if self.dismissed.is_some() => {}
            Some(token) => {
                let same_trigger = self
                    .controller
                    .range()
                    .is_some_and(|r| Some((r.row, r.start_col)) == key);
                let props = self.props_for(token);
                if same_trigger {
                    self.controller.on_suggestion_update(props);
                } else {
                    self.controller.on_suggestion_start(props);
                }
            }
            None => {
                if self.controller.is_open() {
                    self.controller.on_suggestion_end();
                }
            }
        }
    }

    /// Marks the trigger that was just cancelled so it does not reopen.
    pub(crate) fn remember_dismissal(&mut self, row: usize, start_col: usize) {
        self.dismissed = Some((row, start_col));
    }
}
