//! Footer under paged tables

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use lunar_app::pagination::PaginationModel;

use crate::theme::styles;

use super::kbd::kbd;

pub struct PaginationBar {
    model: PaginationModel,
}

impl PaginationBar {
    pub fn new(model: PaginationModel) -> Self {
        Self { model }
    }

    fn line(&self) -> Option<Line<'static>> {
        let summary = self.model.summary()?;
        let enabled = |on: bool| {
            if on {
                styles::text_secondary()
            } else {
                styles::text_muted()
            }
        };
        Some(Line::from(vec![
            Span::styled(format!(" {summary}"), styles::text_secondary()),
            Span::raw("   "),
            Span::styled(
                format!(
                    "Page {} of {}",
                    self.model.current_page(),
                    self.model.total_pages()
                ),
                styles::text_primary(),
            ),
            Span::raw("   "),
            kbd("["),
            Span::styled(" prev ", enabled(self.model.has_prev())),
            kbd("]"),
            Span::styled(" next ", enabled(self.model.has_next())),
            kbd("+/-"),
            Span::styled(format!(" {} per page", self.model.limit), styles::text_muted()),
        ]))
    }
}

impl Widget for PaginationBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(line) = self.line() {
            line.render(area, buf);
        }
    }
}
