//! Floating block command menu.
//!
//! Draws the filtered commands from a [`MenuView`] as a bordered list with
//! the title on the left and the description dimmed to its right. When there
//! are more matches than rows, the list scrolls to keep the selection visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::core::popup::MenuView;
use crate::tui::Theme;

/// Default maximum number of visible rows.
pub const MAX_MENU_ROWS: usize = 8;

/// Widest the menu may grow, borders included.
pub const MAX_MENU_WIDTH: u16 = 60;

/// Widget for the block command menu.
#[derive(Debug)]
pub struct CommandMenu<'a> {
    view: &'a MenuView,
    theme: &'a Theme,
    max_rows: usize,
}

impl<'a> CommandMenu<'a> {
    #[must_use]
    pub const fn new(view: &'a MenuView, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            max_rows: MAX_MENU_ROWS,
        }
    }

    /// Caps the number of visible rows. Zero is treated as one.
    #[must_use]
    pub fn max_rows(mut self, rows: usize) -> Self {
        self.max_rows = rows.max(1);
        self
    }

    fn title_width(&self) -> usize {
        self.view
            .items
            .iter()
            .map(|item| item.title.width())
            .max()
            .unwrap_or(0)
    }

    /// Returns `(width, height)` in cells, borders included.
    #[must_use]
    pub fn preferred_size(&self) -> (u16, u16) {
        if self.view.items.is_empty() {
            return (0, 0);
        }
        let desc_width = self
            .view
            .items
            .iter()
            .map(|item| item.description.width())
            .max()
            .unwrap_or(0);

        // "> " + title + gap + description + borders
        let width = 2 + self.title_width() + 2 + desc_width + 2;
        #[allow(clippy::cast_possible_truncation)] // clamped to MAX_MENU_WIDTH
        let width = width.min(usize::from(MAX_MENU_WIDTH)) as u16;

        let rows = self.view.items.len().min(self.max_rows);
        #[allow(clippy::cast_possible_truncation)] // rows is small
        let height = (rows + 2) as u16;
        (width, height)
    }

    /// First item index shown so that `selected` stays in a window of `rows`.
    fn scroll_offset(&self, rows: usize) -> usize {
        if rows == 0 {
            return 0;
        }
        (self.view.selected + 1).saturating_sub(rows)
    }
}

impl Widget for CommandMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.view.items.is_empty() || area.is_empty() {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .title(" Blocks ")
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = usize::from(inner.height).min(self.max_rows);
        let offset = self.scroll_offset(rows);
        let title_width = self.title_width();

        let items: Vec<ListItem> = self
            .view
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(i, item)| {
                let selected = i == self.view.selected;
                let (prefix, title_style) = if selected {
                    ("> ", self.theme.selected_item_style())
                } else {
                    ("  ", self.theme.normal_style())
                };
                let pad = title_width.saturating_sub(item.title.width());
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, title_style),
                    Span::styled(format!("{}{}", item.title, " ".repeat(pad)), title_style),
                    Span::raw("  "),
                    Span::styled(item.description, self.theme.muted_style()),
                ]))
            })
            .collect();

        Widget::render(List::new(items), inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::CommandRegistry;
    use anyhow::Result;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn view(query: &str, selected: usize) -> MenuView {
        MenuView {
            items: CommandRegistry::with_builtins().matching(query),
            selected,
            anchor: Rect::new(0, 0, 1, 1),
        }
    }

    fn row_text(buffer: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn render(view: &MenuView, max_rows: usize) -> Result<(Buffer, u16, u16)> {
        let theme = Theme::default();
        let menu = CommandMenu::new(view, &theme).max_rows(max_rows);
        let (width, height) = menu.preferred_size();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend)?;
        terminal.draw(|frame| {
            frame.render_widget(CommandMenu::new(view, &theme).max_rows(max_rows), frame.area());
        })?;
        Ok((terminal.backend().buffer().clone(), width, height))
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    #[test]
    fn empty_view_has_no_size() {
        let theme = Theme::default();
        let empty = view("zzz", 0);
        assert_eq!(CommandMenu::new(&empty, &theme).preferred_size(), (0, 0));
    }

    #[test]
    fn height_is_capped_by_max_rows() {
        let theme = Theme::default();
        let all = view("", 0);
        assert_eq!(CommandMenu::new(&all, &theme).preferred_size().1, 10);
        assert_eq!(CommandMenu::new(&all, &theme).max_rows(4).preferred_size().1, 6);
    }

    #[test]
    fn width_never_exceeds_limit() {
        let theme = Theme::default();
        let all = view("", 0);
        assert!(CommandMenu::new(&all, &theme).preferred_size().0 <= MAX_MENU_WIDTH);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn renders_title_and_selected_marker() -> Result<()> {
        let (buffer, width, _) = render(&view("heading", 1), 8)?;
        assert!(row_text(&buffer, 0, width).contains("Blocks"));
        assert!(row_text(&buffer, 1, width).contains("  Heading 1"));
        assert!(row_text(&buffer, 2, width).contains("> Heading 2"));
        assert!(row_text(&buffer, 2, width).contains("Medium section heading"));
        Ok(())
    }

    #[test]
    fn scrolls_to_keep_selection_visible() -> Result<()> {
        let (buffer, width, height) = render(&view("", 9), 3)?;
        assert_eq!(height, 5);
        assert!(row_text(&buffer, 1, width).contains("Quote"));
        assert!(row_text(&buffer, 3, width).contains("> Table"));
        Ok(())
    }

    #[test]
    fn zero_area_renders_nothing() {
        let theme = Theme::default();
        let all = view("", 0);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 0, 0));
        CommandMenu::new(&all, &theme).render(Rect::new(0, 0, 0, 0), &mut buffer);
        assert!(buffer.content.is_empty());
    }
}
