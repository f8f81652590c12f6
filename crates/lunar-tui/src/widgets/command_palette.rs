//! Command palette overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lunar_app::command_palette::{CommandPaletteState, PaletteItemKind};

use crate::theme::{palette, styles};

use super::badge::Badge;
use super::kbd::KeyHints;
use super::modal_overlay::{clear_area, dim_background, top_centered_rect};
use super::text::{display_width, pad_right};

const PALETTE_WIDTH: u16 = 64;
const PALETTE_HEIGHT: u16 = 18;

pub struct CommandPalette<'a> {
    state: &'a CommandPaletteState,
}

impl<'a> CommandPalette<'a> {
    pub fn new(state: &'a CommandPaletteState) -> Self {
        Self { state }
    }

    /// First row to draw so `selected` stays within `visible` rows
    fn scroll_offset(selected: usize, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        selected.saturating_sub(visible - 1)
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let message = if self.state.loading {
            Some("Loading...")
        } else if self.state.result_count() == 0 {
            Some("No results found")
        } else {
            None
        };
        if let Some(message) = message {
            Paragraph::new(Span::styled(message, styles::text_muted()))
                .centered()
                .render(Rect { y: area.y + area.height / 2, height: 1, ..area }, buf);
            return;
        }

        let visible = area.height as usize;
        let selected = self.state.selected();
        let offset = Self::scroll_offset(selected, visible);
        let width = area.width as usize;

        for (row, (index, item)) in self
            .state
            .results()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let is_selected = index == selected;
            let icon = match item.kind {
                PaletteItemKind::Navigation => "→ ",
                PaletteItemKind::Function => "λ ",
            };
            let mut spans = vec![
                Span::styled(if is_selected { "▌" } else { " " }, styles::accent()),
                Span::styled(icon, styles::text_muted()),
                Span::styled(item.label.clone(), styles::text_primary()),
            ];
            if item.disabled {
                spans.push(Span::raw(" "));
                spans.push(Badge::function_status(true).span());
            }
            let used: usize = spans.iter().map(|s| s.width()).sum();
            let description_width = width.saturating_sub(used + 2);
            if description_width > 4 {
                let description = pad_right(&item.description, description_width);
                let pad = width
                    .saturating_sub(used + display_width(&description) + 1)
                    .max(1);
                spans.push(Span::raw(" ".repeat(pad)));
                spans.push(Span::styled(description, styles::text_muted()));
            }

            let mut line = Line::from(spans);
            if is_selected {
                line = line.style(Style::default().bg(palette::SELECTED_BG));
            }
            let y = area.y + row as u16;
            line.render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

impl Widget for CommandPalette<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);
        let rect = top_centered_rect(PALETTE_WIDTH, PALETTE_HEIGHT, 2, area);
        clear_area(buf, rect);

        let block = styles::modal_block("Go to");
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.height < 4 {
            return;
        }

        let query = self.state.query.value();
        let input = if query.is_empty() {
            Line::from(vec![
                Span::styled("› ", styles::accent()),
                Span::styled("Search functions and pages...", styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled("› ", styles::accent()),
                Span::styled(query.to_string(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ])
        };
        input.render(Rect { height: 1, ..inner }, buf);

        let results = Rect {
            y: inner.y + 2,
            height: inner.height - 3,
            ..inner
        };
        self.render_results(results, buf);

        KeyHints::new()
            .hint("↑↓", "navigate")
            .hint("Enter", "select")
            .hint("Esc", "close")
            .render(
                Rect {
                    y: inner.y + inner.height - 1,
                    height: 1,
                    ..inner
                },
                buf,
            );
    }
}
