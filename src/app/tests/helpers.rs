//! Shared test utilities for the app module.
//!
//! - `create_test_app` - an `App` over the given text, laid out at 80x24
//! - `type_text` - feeds characters (and `\n` as Enter) through `handle_key`
//! - `render_app` - draws a frame to a `TestBackend` and returns the buffer
//! - Key event helpers (`char_key`, `key`, `ctrl`, `alt`)

use crate::app::App;
use crate::fs::EditorSettings;
use anyhow::Result;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::TestBackend};

pub const SCREEN: Rect = Rect::new(0, 0, 80, 24);

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates an unmodified key press.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..char_key(c)
    }
}

pub fn alt(c: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::ALT,
        ..char_key(c)
    }
}

/// Creates an app over `text` with custom settings, laid out at [`SCREEN`].
///
/// The cursor starts at the top of the document.
pub fn create_test_app_with_settings(text: &str, settings: EditorSettings) -> App {
    let mut app = App::new(settings, Some(text), "test.md");
    app.update_layout(SCREEN);
    app
}

/// Creates an app over `text`, laid out at [`SCREEN`].
pub fn create_test_app(text: &str) -> App {
    create_test_app_with_settings(text, EditorSettings::default())
}

/// Types `text` one key at a time; `\n` is sent as Enter.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        if c == '\n' {
            app.handle_key(key(KeyCode::Enter));
        } else {
            app.handle_key(char_key(c));
        }
    }
}

/// Titles of the items currently in the mounted menu.
pub fn menu_titles(app: &App) -> Vec<&'static str> {
    app.overlay
        .borrow()
        .view()
        .map(|view| view.items.iter().map(|item| item.title).collect())
        .unwrap_or_default()
}

/// Index of the highlighted item in the mounted menu.
pub fn menu_selected(app: &App) -> Option<usize> {
    app.overlay.borrow().view().map(|view| view.selected)
}

/// Renders a full frame and returns the resulting buffer.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| {
        app.update_layout(frame.area());
        app.render(frame);
    })?;
    Ok(terminal.backend().buffer().clone())
}

/// Returns the text of one buffer row.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Returns true if any row of `buffer` contains `needle`.
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    (0..buffer.area.height).any(|y| row_text(buffer, y).contains(needle))
}
