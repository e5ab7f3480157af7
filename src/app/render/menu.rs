//! Command menu placement.

use ratatui::{Frame, layout::Rect};

use crate::app::App;
use crate::tui::widgets::CommandMenu;

impl App {
    /// Draws the mounted menu next to its anchor.
    pub(super) fn render_menu(&self, frame: &mut Frame) {
        let Ok(overlay) = self.overlay.try_borrow() else {
            return;
        };
        let Some(view) = overlay.view() else {
            return;
        };

        let menu = CommandMenu::new(view, &self.theme).max_rows(self.settings.max_menu_rows);
        let (width, height) = menu.preferred_size();
        if height == 0 {
            return;
        }

        let area = calculate_menu_position(view.anchor, width, height, frame.area());
        frame.render_widget(menu, area);
    }
}

/// Places the menu below the anchor if it fits, otherwise above.
///
/// When neither side fits, uses the side with more room and clips the
/// height. The left edge follows the anchor but is pulled back so the menu
/// stays on screen.
#[must_use]
pub(crate) fn calculate_menu_position(anchor: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let cursor_y = anchor.y;
    let below_space = screen.bottom().saturating_sub(cursor_y.saturating_add(1));
    let above_space = cursor_y.saturating_sub(screen.y);

    let y = if below_space >= height {
        cursor_y + 1
    } else if above_space >= height {
        cursor_y - height
    } else if below_space >= above_space {
        cursor_y.saturating_add(1)
    } else {
        cursor_y.saturating_sub(above_space)
    };

    let width = width.min(screen.width);
    let x = if anchor.x.saturating_add(width) <= screen.right() {
        anchor.x
    } else {
        screen.right().saturating_sub(width)
    };

    let height = height.min(screen.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}
