//! Floating menu surface and its scoped handle.
//!
//! A [`PopupSurface`] is wherever the menu is drawn. The suggestion
//! controller never talks to it directly: it acquires a [`PopupHandle`] on
//! open and lets go of it on close. The handle unmounts the surface exactly
//! once, either through [`PopupHandle::release`] or when it is dropped, so a
//! menu cannot outlive the controller that opened it.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::commands::CommandDescriptor;

/// Errors from mounting the menu surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PopupError {
    /// No cursor rectangle was available to anchor the menu.
    #[error("no anchor rectangle available for the menu")]
    AnchorUnavailable,
    /// The surface already shows a menu.
    #[error("menu surface is already mounted")]
    AlreadyMounted,
    /// The surface is borrowed elsewhere and cannot be changed right now.
    #[error("menu surface is busy")]
    SurfaceBusy,
}

/// Identifier of one mount on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Everything the surface needs to draw the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// Items in display order.
    pub items: Vec<CommandDescriptor>,
    /// Index of the highlighted item.
    pub selected: usize,
    /// Screen rectangle of the text cursor the menu hangs off.
    pub anchor: Rect,
}

/// A place the menu can be shown.
pub trait PopupSurface {
    /// Shows the menu and returns the id of this mount.
    ///
    /// # Errors
    ///
    /// Returns a [`PopupError`] if the menu cannot be shown.
    fn mount(&mut self, view: MenuView) -> Result<SurfaceId, PopupError>;

    /// Redraws an existing mount with new contents or position.
    fn update(&mut self, id: SurfaceId, view: MenuView);

    /// Removes a mount.
    fn unmount(&mut self, id: SurfaceId);
}

/// Surface shared between the controller and whoever renders it.
pub type SharedSurface = Rc<RefCell<dyn PopupSurface>>;

/// Scoped ownership of a mounted menu.
pub struct PopupHandle {
    id: SurfaceId,
    surface: SharedSurface,
    anchor: Rect,
}

impl PopupHandle {
    /// Mounts `items` on `surface` at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::AnchorUnavailable`] without touching the
    /// surface when `anchor` is `None`, and forwards mount failures.
    pub fn acquire(
        surface: &SharedSurface,
        items: Vec<CommandDescriptor>,
        selected: usize,
        anchor: Option<Rect>,
    ) -> Result<Self, PopupError> {
        let anchor = anchor.ok_or(PopupError::AnchorUnavailable)?;
        let id = surface
            .try_borrow_mut()
            .map_err(|_| PopupError::SurfaceBusy)?
            .mount(MenuView {
                items,
                selected,
                anchor,
            })?;
        debug!(id = id.0, ?anchor, "menu mounted");
        Ok(Self {
            id,
            surface: Rc::clone(surface),
            anchor,
        })
    }

    /// Pushes new contents to the mounted menu.
    ///
    /// A `None` anchor keeps the last known position.
    pub fn update(&mut self, items: Vec<CommandDescriptor>, selected: usize, anchor: Option<Rect>) {
        if let Some(anchor) = anchor {
            self.anchor = anchor;
        }
        let view = MenuView {
            items,
            selected,
            anchor: self.anchor,
        };
        match self.surface.try_borrow_mut() {
            Ok(mut surface) => surface.update(self.id, view),
            Err(_) => warn!(id = self.id.0, "menu surface busy, skipped update"),
        }
    }

    /// Returns the position the menu is anchored to.
    #[must_use]
    pub const fn anchor(&self) -> Rect {
        self.anchor
    }

    /// Returns the id of this mount.
    #[must_use]
    pub const fn id(&self) -> SurfaceId {
        self.id
    }

    /// Unmounts the menu now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for PopupHandle {
    fn drop(&mut self) {
        match self.surface.try_borrow_mut() {
            Ok(mut surface) => {
                surface.unmount(self.id);
                debug!(id = self.id.0, "menu unmounted");
            }
            Err(_) => warn!(id = self.id.0, "menu surface busy, could not unmount"),
        }
    }
}

impl std::fmt::Debug for PopupHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopupHandle")
            .field("id", &self.id)
            .field("anchor", &self.anchor)
            .finish_non_exhaustive()
    }
}
