//! The terminal-side menu surface.
//!
//! [`MenuOverlay`] stores what the controller mounted; the render pass reads
//! it every frame and draws a [`CommandMenu`](crate::tui::widgets::CommandMenu)
//! next to the anchor. It holds at most one mount at a time.

use tracing::trace;

use crate::core::popup::{MenuView, PopupError, PopupSurface, SurfaceId};

/// Single-slot menu surface drawn by the render pass.
#[derive(Debug, Default)]
pub struct MenuOverlay {
    current: Option<(SurfaceId, MenuView)>,
    next_id: u64,
}

impl MenuOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view to draw this frame, if a menu is mounted.
    #[must_use]
    pub fn view(&self) -> Option<&MenuView> {
        self.current.as_ref().map(|(_, view)| view)
    }

    /// Returns true if a menu is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.current.is_some()
    }
}

impl PopupSurface for MenuOverlay {
    fn mount(&mut self, view: MenuView) -> Result<SurfaceId, PopupError> {
        if self.current.is_some() {
            return Err(PopupError::AlreadyMounted);
        }
        self.next_id += 1;
        let id = SurfaceId(self.next_id);
        trace!(id = id.0, items = view.items.len(), "overlay mount");
        self.current = Some((id, view));
        Ok(id)
    }

    fn update(&mut self, id: SurfaceId, view: MenuView) {
        match &mut self.current {
            Some((current, slot)) if *current == id => *slot = view,
            _ => trace!(id = id.0, "overlay update for stale mount ignored"),
        }
    }

    fn unmount(&mut self, id: SurfaceId) {
        if self.current.as_ref().is_some_and(|(current, _)| *current == id) {
            trace!(id = id.0, "overlay unmount");
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::CommandRegistry;
    use ratatui::layout::Rect;

    fn view(selected: usize) -> MenuView {
        MenuView {
            items: CommandRegistry::with_builtins().matching("list"),
            selected,
            anchor: Rect::new(3, 4, 1, 1),
        }
    }

    #[test]
    fn mount_update_unmount() -> anyhow::Result<()> {
        let mut overlay = MenuOverlay::new();
        let id = overlay.mount(view(0))?;
        assert!(overlay.is_mounted());

        overlay.update(id, view(2));
        assert_eq!(overlay.view().map(|v| v.selected), Some(2));

        overlay.unmount(id);
        assert!(overlay.view().is_none());
        Ok(())
    }

    #[test]
    fn second_mount_is_refused() -> anyhow::Result<()> {
        let mut overlay = MenuOverlay::new();
        overlay.mount(view(0))?;
        assert_eq!(overlay.mount(view(1)), Err(PopupError::AlreadyMounted));
        assert_eq!(overlay.view().map(|v| v.selected), Some(0));
        Ok(())
    }

    #[test]
    fn stale_ids_are_ignored() -> anyhow::Result<()> {
        let mut overlay = MenuOverlay::new();
        let old = overlay.mount(view(0))?;
        overlay.unmount(old);
        let new = overlay.mount(view(1))?;
        assert_ne!(old, new);

        overlay.update(old, view(2));
        overlay.unmount(old);
        assert_eq!(overlay.view().map(|v| v.selected), Some(1));
        Ok(())
    }
}
