//! Terminal event modes.
//!
//! Bracketed paste lets a multi-line paste arrive as one event instead of a
//! burst of keys that would each trigger the command menu. The keyboard
//! enhancement protocol disambiguates chords such as Ctrl+Shift+Z and Esc.

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

/// Enables terminal event modes and disables them again on drop.
///
/// Cleanup runs on panic unwind as well.
#[derive(Debug)]
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
    keyboard_enhancement_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            bracketed_paste_enabled: false,
            keyboard_enhancement_enabled: false,
        };

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                debug!("bracketed paste enabled");
                guard.bracketed_paste_enabled = true;
            }
            Err(e) => warn!(error = %e, "could not enable bracketed paste, pastes arrive as keys"),
        }

        match execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        ) {
            Ok(()) => {
                debug!("keyboard enhancement enabled");
                guard.keyboard_enhancement_enabled = true;
            }
            // Not fatal; some chords just become indistinguishable.
            Err(e) => debug!(error = %e, "keyboard enhancement unavailable"),
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.keyboard_enhancement_enabled {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
