//! Keyboard hint chips

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::styles;

/// A single key chip, e.g. ` Ctrl+S `
pub fn kbd(key: &str) -> Span<'static> {
    Span::styled(format!(" {key} "), styles::keybinding())
}

/// Row of `key description` pairs
#[derive(Debug, Clone, Default)]
pub struct KeyHints {
    hints: Vec<(String, String)>,
}

impl KeyHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push((key.into(), description.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, description)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(kbd(key));
            spans.push(Span::styled(format!(" {description}"), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
