//! The slash-command suggestion controller.
//!
//! The host (the editor) drives this controller through [`SuggestionEvents`]:
//!
//! - `on_suggestion_start` when a trigger token appears under the cursor
//! - `on_suggestion_update` on every keystroke or cursor move while it lives
//! - `on_key_event` for each key while the menu is open, before the text buffer sees it
//! - `on_suggestion_end` when the token disappears or the cursor leaves it
//!
//! ## States
//!
//! ```text
//!            start (matches)          cancel / confirm / end / no matches
//!  Closed ───────────────────▶ Open ─────────────────────────────────────▶ Closed
//!                               │ ▲
//!                               └─┘ update / navigation
//! ```
//!
//! Closing releases the menu surface exactly once; closing an already closed
//! controller does nothing. A surface that failed to mount is not retried:
//! the controller stays open without a visible menu and lets every key through
//! to the text buffer until the context ends.

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::core::commands::{CommandDescriptor, CommandRegistry};
use crate::core::dispatch::{BlockEditor, TableShape, TriggerRange, dispatch};
use crate::core::popup::{PopupHandle, SharedSurface};
use crate::core::suggestion::{MenuKey, SuggestionState};

/// What the host reports about the live suggestion context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionProps {
    /// Text typed after the trigger character.
    pub query: String,
    /// Trigger character up to the cursor.
    pub range: TriggerRange,
    /// Screen rectangle of the cursor, when the host can compute it.
    pub anchor: Option<Rect>,
}

/// Why the menu last closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The user pressed the cancel key.
    Cancelled,
    /// The user confirmed a command.
    Confirmed,
    /// The host ended the suggestion context.
    ContextEnded,
    /// The query stopped matching any command.
    NoMatches,
}

/// Lifecycle callbacks a suggestion handler receives from the host.
pub trait SuggestionEvents {
    /// A trigger was typed; open the menu.
    fn on_suggestion_start(&mut self, props: SuggestionProps);

    /// The query or cursor position changed.
    fn on_suggestion_update(&mut self, props: SuggestionProps);

    /// A key arrived while the context is live.
    ///
    /// Returns `true` if the key was consumed; the host must then skip its
    /// own handling of that key.
    fn on_key_event(&mut self, key: &KeyEvent, editor: &mut dyn BlockEditor) -> bool;

    /// The trigger context is gone.
    fn on_suggestion_end(&mut self);
}

#[derive(Debug)]
struct OpenMenu {
    query: String,
    range: TriggerRange,
    state: SuggestionState,
    popup: Option<PopupHandle>,
}

impl OpenMenu {
    fn refresh_surface(&mut self, anchor: Option<Rect>) {
        if let Some(popup) = &mut self.popup {
            popup.update(
                self.state.items().to_vec(),
                self.state.selected_index(),
                anchor,
            );
        }
    }
}

/// Drives the slash menu from host events.
pub struct SuggestionController {
    registry: CommandRegistry,
    surface: SharedSurface,
    table: TableShape,
    open: Option<OpenMenu>,
    last_close: Option<CloseReason>,
}

impl std::fmt::Debug for SuggestionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionController")
            .field("open", &self.open)
            .field("last_close", &self.last_close)
            .finish_non_exhaustive()
    }
}

impl SuggestionController {
    /// Creates a closed controller.
    #[must_use]
    pub fn new(registry: CommandRegistry, surface: SharedSurface, table: TableShape) -> Self {
        Self {
            registry,
            surface,
            table,
            open: None,
            last_close: None,
        }
    }

    /// Returns true while a suggestion context is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns true if the menu is open and actually shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.open.as_ref().is_some_and(|m| m.popup.is_some())
    }

    /// Returns the navigation state of the open menu.
    #[must_use]
    pub fn state(&self) -> Option<&SuggestionState> {
        self.open.as_ref().map(|m| &m.state)
    }

    /// Returns the current query of the open menu.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.open.as_ref().map(|m| m.query.as_str())
    }

    /// Returns the trigger range of the open menu.
    #[must_use]
    pub fn range(&self) -> Option<TriggerRange> {
        self.open.as_ref().map(|m| m.range)
    }

    /// Returns why the menu last closed.
    #[must_use]
    pub const fn last_close_reason(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Returns the command registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    fn close(&mut self, reason: CloseReason) {
        let Some(menu) = self.open.take() else {
            return;
        };
        if let Some(popup) = menu.popup {
            popup.release();
        }
        self.last_close = Some(reason);
        debug!(?reason, query = %menu.query, "suggestion closed");
    }

    fn matches_for(&self, query: &str) -> Vec<CommandDescriptor> {
        self.registry.matching(query)
    }
}

impl SuggestionEvents for SuggestionController {
    fn on_suggestion_start(&mut self, props: SuggestionProps) {
        if self.open.is_some() {
            debug!("suggestion restarted while open");
            self.close(CloseReason::ContextEnded);
        }

        let items = self.matches_for(&props.query);
        if items.is_empty() {
            debug!(query = %props.query, "no commands match, menu stays closed");
            self.last_close = Some(CloseReason::NoMatches);
            return;
        }

        let state = SuggestionState::new(items);
        let popup = match PopupHandle::acquire(
            &self.surface,
            state.items().to_vec(),
            state.selected_index(),
            props.anchor,
        ) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "could not show command menu");
                None
            }
        };

        debug!(query = %props.query, matches = state.items().len(), "suggestion opened");
        self.open = Some(OpenMenu {
            query: props.query,
            range: props.range,
            state,
            popup,
        });
    }

    fn on_suggestion_update(&mut self, props: SuggestionProps) {
        if self.open.is_none() {
            return;
        }

        let items = self.matches_for(&props.query);
        if items.is_empty() {
            self.close(CloseReason::NoMatches);
            return;
        }

        let Some(menu) = self.open.as_mut() else {
            return;
        };
        if menu.query != props.query {
            menu.state.replace_items(items);
            menu.query = props.query;
        }
        menu.range = props.range;
        menu.refresh_surface(props.anchor);
    }

    fn on_key_event(&mut self, key: &KeyEvent, editor: &mut dyn BlockEditor) -> bool {
        let Some(menu) = self.open.as_mut() else {
            return false;
        };
        if menu.popup.is_none() {
            return false;
        }

        match MenuKey::from_key_event(key) {
            MenuKey::Previous => {
                menu.state.select_previous();
                menu.refresh_surface(None);
                true
            }
            MenuKey::Next => {
                menu.state.select_next();
                menu.refresh_surface(None);
                true
            }
            MenuKey::Confirm => {
                let chosen = menu.state.selected_item().map(|item| item.command);
                let range = menu.range;
                self.close(CloseReason::Confirmed);
                if let Some(command) = chosen {
                    dispatch(command, range, self.table, editor);
                }
                true
            }
            MenuKey::Cancel => {
                self.close(CloseReason::Cancelled);
                true
            }
            MenuKey::Other => false,
        }
    }

    fn on_suggestion_end(&mut self) {
        self.close(CloseReason::ContextEnded);
    }
}
