//! Tabbed reference of runtime functions

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

use lunar_app::api_reference::ApiSection;

use crate::theme::styles;

pub struct ApiReference<'a> {
    sections: &'a [ApiSection],
    active: usize,
}

impl<'a> ApiReference<'a> {
    pub fn new(sections: &'a [ApiSection], active: usize) -> Self {
        Self { sections, active }
    }
}

impl Widget for ApiReference<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(section) = self.sections.get(self.active) else {
            return;
        };
        let [tabs_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

        Tabs::new(self.sections.iter().map(|s| s.name))
            .select(self.active)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .padding("", "")
            .render(tabs_area, buf);

        let mut lines = vec![
            Line::from(Span::styled(section.description, styles::text_muted())),
            Line::default(),
        ];
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled(item.name, styles::accent()),
                Span::styled(format!("  {}", item.kind), styles::text_muted()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", item.description),
                styles::text_secondary(),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lunar_app::api_reference::LUA_API_SECTIONS;

    #[test]
    fn test_active_section_items_render() {
        let mut term = TestTerminal::with_size(50, 14);
        term.render_widget(ApiReference::new(&LUA_API_SECTIONS, 1), term.area());
        assert!(term.buffer_contains("HTTP"));
        assert!(term.buffer_contains("Logging utilities for debugging"));
        assert!(term.buffer_contains("log.warn(msg)"));
        assert!(!term.buffer_contains("http.get(url, opts)"));
    }

    #[test]
    fn test_out_of_range_tab_draws_nothing() {
        let mut term = TestTerminal::with_size(30, 4);
        term.render_widget(ApiReference::new(&LUA_API_SECTIONS, 9), term.area());
        assert!(!term.buffer_contains("HTTP"));
    }
}
