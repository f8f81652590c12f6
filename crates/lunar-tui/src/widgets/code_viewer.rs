//! Line-numbered code display, also used as the editing surface

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct CodeViewer<'a> {
    lines: Vec<&'a str>,
    /// (row, col) of the edit cursor
    cursor: Option<(usize, usize)>,
    scroll: usize,
}

impl<'a> CodeViewer<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines: lines.iter().map(String::as_str).collect(),
            cursor: None,
            scroll: 0,
        }
    }

    pub fn from_text(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            cursor: None,
            scroll: 0,
        }
    }

    pub fn cursor(mut self, cursor: (usize, usize)) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    fn gutter_width(&self) -> usize {
        self.lines.len().max(1).to_string().len()
    }

    /// First visible row; follows the cursor when there is one
    fn offset(&self, height: usize) -> usize {
        let max = self.lines.len().saturating_sub(height);
        match self.cursor {
            Some((row, _)) if height > 0 => row.saturating_sub(height - 1).max(self.scroll.min(row)),
            _ => self.scroll.min(max),
        }
    }

    fn cursor_spans(text: &str, col: usize) -> Vec<Span<'static>> {
        let chars: Vec<char> = text.chars().collect();
        let col = col.min(chars.len());
        let before: String = chars[..col].iter().collect();
        let at = chars.get(col).map(|c| c.to_string()).unwrap_or_else(|| " ".into());
        let after: String = chars.iter().skip(col + 1).collect();
        vec![
            Span::styled(before, styles::text_primary()),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(after, styles::text_primary()),
        ]
    }
}

impl Widget for CodeViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let gutter = self.gutter_width();
        let offset = self.offset(height);

        for (row, (index, text)) in self
            .lines
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .enumerate()
        {
            let mut spans = vec![Span::styled(
                format!("{:>gutter$} │ ", index + 1),
                styles::text_muted(),
            )];
            match self.cursor {
                Some((cursor_row, col)) if cursor_row == index => {
                    spans.extend(Self::cursor_spans(text, col));
                }
                _ => spans.push(Span::styled(text.to_string(), styles::text_primary())),
            }
            let y = area.y + row as u16;
            Line::from(spans).render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_line_numbers() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(CodeViewer::from_text("a\nb\nc"), term.area());
        assert_eq!(term.lines()[0].trim_end(), "1 │ a");
        assert_eq!(term.lines()[2].trim_end(), "3 │ c");
    }

    #[test]
    fn test_gutter_widens_past_nine_lines() {
        let text = (1..=12).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut term = TestTerminal::with_size(30, 12);
        term.render_widget(CodeViewer::from_text(&text), term.area());
        assert_eq!(term.lines()[0].trim_end(), " 1 │ 1");
        assert_eq!(term.lines()[11].trim_end(), "12 │ 12");
    }

    #[test]
    fn test_cursor_keeps_row_visible() {
        let text = (1..=20).map(|i| format!("line{i}")).collect::<Vec<_>>().join("\n");
        let mut term = TestTerminal::with_size(30, 5);
        term.render_widget(CodeViewer::from_text(&text).cursor((14, 0)), term.area());
        assert!(term.line_contains(4, "line15"));
        assert!(!term.buffer_contains("line1 "));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut term = TestTerminal::with_size(30, 2);
        term.render_widget(CodeViewer::from_text("a\nb\nc").scroll(50), term.area());
        assert!(term.line_contains(0, "2 │ b"));
        assert!(term.line_contains(1, "3 │ c"));
    }
}
