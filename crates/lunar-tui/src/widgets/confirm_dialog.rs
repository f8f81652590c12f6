//! Yes/no modal in front of destructive actions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use lunar_app::confirm_dialog::ConfirmDialogState;

use crate::theme::{palette, styles};

use super::kbd::kbd;
use super::modal_overlay::{centered_rect, clear_area, dim_background};
use super::text::display_width;

const DIALOG_WIDTH: u16 = 56;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let text_width = DIALOG_WIDTH.saturating_sub(4).max(1) as usize;
        let message_lines = display_width(&self.state.message).div_ceil(text_width).max(1) as u16;
        let rect = centered_rect(DIALOG_WIDTH, message_lines + 5, area);
        clear_area(buf, rect);

        let accent = if self.state.danger {
            palette::STATUS_RED
        } else {
            palette::ACCENT
        };
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.state.title),
                styles::text_bold().fg(accent),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let message_area = Rect {
            x: inner.x + 1,
            y: inner.y + 1,
            width: inner.width.saturating_sub(2),
            height: message_lines.min(inner.height.saturating_sub(1)),
        };
        Paragraph::new(self.state.message.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        if inner.height > 0 {
            let buttons = Line::from(vec![
                kbd("y"),
                Span::styled(" Yes   ", styles::text_secondary()),
                kbd("n"),
                Span::styled(" No", styles::text_secondary()),
            ]);
            let y = inner.y + inner.height - 1;
            Paragraph::new(buttons)
                .alignment(Alignment::Right)
                .render(Rect::new(inner.x, y, inner.width.saturating_sub(1), 1), buf);
        }
    }
}
