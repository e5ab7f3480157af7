//! Editor screen rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::tui::widgets::Toolbar;

impl App {
    /// Renders header, toolbar, text area and footer.
    pub(super) fn render_editor(&self, frame: &mut Frame) {
        let layout = self.layout;
        self.render_header(frame, layout.header);
        frame.render_widget(Toolbar::new(self.toolbar_state(), &self.theme), layout.toolbar);
        self.render_text_area(frame, layout.editor);
        self.render_footer(frame, layout.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" slashpad ", self.theme.header_style()),
            Span::styled(self.title.as_str(), self.theme.normal_style()),
        ];
        if self.document.can_undo() {
            spans.push(Span::styled(" [modified]", self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_text_area(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Document ")
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" ", self.theme.muted_style()),
                Span::styled(self.settings.trigger_char.to_string(), self.theme.highlight_style()),
                Span::styled(" for blocks ", self.theme.muted_style()),
            ]))
            .border_style(self.theme.border_style());

        let mut textarea = self.document.textarea().clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        frame.render_widget(&textarea, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer_content = if let Some(status) = &self.status {
            vec![Span::styled(format!(" {status}"), self.theme.warning_style())]
        } else if self.controller.is_visible() {
            vec![
                Span::styled(" [↑/↓] ", self.theme.highlight_style()),
                Span::styled("Navigate  ", self.theme.muted_style()),
                Span::styled("[Enter/Tab] ", self.theme.highlight_style()),
                Span::styled("Insert  ", self.theme.muted_style()),
                Span::styled("[Esc] ", self.theme.highlight_style()),
                Span::styled("Dismiss", self.theme.muted_style()),
            ]
        } else {
            vec![
                Span::styled(" [Ctrl+B/I] ", self.theme.highlight_style()),
                Span::styled("Bold/Italic  ", self.theme.muted_style()),
                Span::styled("[Ctrl+Z/Y] ", self.theme.highlight_style()),
                Span::styled("Undo/Redo  ", self.theme.muted_style()),
                Span::styled("[Ctrl+Q] ", self.theme.highlight_style()),
                Span::styled("Quit", self.theme.muted_style()),
            ]
        };

        frame.render_widget(Paragraph::new(Line::from(footer_content)), area);
    }
}
