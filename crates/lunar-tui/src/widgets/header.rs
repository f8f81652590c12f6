//! Top bar with the breadcrumb trail, and the per-function title block

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lunar_core::Function;

use crate::theme::styles;

use super::badge::{Badge, IdPill};
use super::kbd::kbd;
use super::text::display_width;

/// `◐ Lunar  Functions › fn_1 › Code` with a search hint on the right
pub struct MainHeader<'a> {
    trail: &'a [String],
    show_search_hint: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(trail: &'a [String]) -> Self {
        Self {
            trail,
            show_search_hint: false,
        }
    }

    pub fn search_hint(mut self, show: bool) -> Self {
        self.show_search_hint = show;
        self
    }

    fn trail_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(" ◐ Lunar ", styles::accent_bold()),
            Span::raw(" "),
        ];
        let last = self.trail.len().saturating_sub(1);
        for (i, crumb) in self.trail.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", styles::text_muted()));
            }
            let style = if i == last {
                styles::text_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(crumb.clone(), style));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.trail_line().render(area, buf);

        if self.show_search_hint {
            let hint = Line::from(vec![
                kbd("Ctrl+K"),
                Span::styled(" search ", styles::text_muted()),
            ]);
            let width = hint.width() as u16;
            if area.width > width + display_width(&self.trail.join(" › ")) as u16 + 12 {
                let x = area.x + area.width - width;
                hint.render(Rect::new(x, area.y, width, 1), buf);
            }
        }
    }
}

/// Name, ID pill, version and status badges, then the description
pub struct FunctionHeader<'a> {
    function: &'a Function,
}

impl<'a> FunctionHeader<'a> {
    pub fn new(function: &'a Function) -> Self {
        Self { function }
    }

    pub const HEIGHT: u16 = 2;
}

impl Widget for FunctionHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let f = self.function;
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(f.name.clone(), styles::text_bold()),
            Span::raw("  "),
            IdPill::new(f.id.clone()).span(),
            Span::raw("  "),
            Badge::version(f.version_label()).span(),
            Span::raw(" "),
            Badge::function_status(f.disabled).span(),
        ]);
        let description = match f.description_text() {
            Some(text) => Span::styled(format!(" {text}"), styles::text_secondary()),
            None => Span::styled(" No description", styles::text_muted()),
        };
        Paragraph::new(vec![title, Line::from(description)]).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lunar_core::ActiveVersion;

    fn function(description: Option<&str>) -> Function {
        Function {
            id: "fn_1".into(),
            name: "hello".into(),
            description: description.map(str::to_string),
            disabled: true,
            active_version: ActiveVersion {
                version: 4,
                code: String::new(),
            },
            env_vars: Default::default(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_breadcrumb_trail() {
        let trail = vec!["Functions".to_string(), "fn_1".to_string(), "Code".to_string()];
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(MainHeader::new(&trail).search_hint(true), term.area());
        assert!(term.buffer_contains("Lunar"));
        assert!(term.buffer_contains("Functions › fn_1 › Code"));
        assert!(term.buffer_contains("Ctrl+K"));
    }

    #[test]
    fn test_function_header_badges() {
        let func = function(Some("says hi"));
        let mut term = TestTerminal::with_size(80, 2);
        term.render_widget(FunctionHeader::new(&func), term.area());
        assert!(term.line_contains(0, "hello"));
        assert!(term.line_contains(0, "fn_1"));
        assert!(term.line_contains(0, "[v4]"));
        assert!(term.line_contains(0, "Disabled"));
        assert!(term.line_contains(1, "says hi"));
    }

    #[test]
    fn test_function_header_description_fallback() {
        let func = function(Some("   "));
        let mut term = TestTerminal::with_size(80, 2);
        term.render_widget(FunctionHeader::new(&func), term.area());
        assert!(term.line_contains(1, "No description"));
    }
}
