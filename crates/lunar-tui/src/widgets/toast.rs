//! Toast stack in the top-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use lunar_app::toast::{Toast, ToastKind};

use crate::theme::{palette, styles};

use super::modal_overlay::clear_area;
use super::text::display_width;

const TOAST_WIDTH: u16 = 44;
const MAX_VISIBLE: usize = 5;

fn kind_color(kind: ToastKind) -> (Color, &'static str) {
    match kind {
        ToastKind::Success => (palette::STATUS_GREEN, "✓"),
        ToastKind::Error => (palette::STATUS_RED, "✗"),
        ToastKind::Info => (palette::STATUS_BLUE, "ℹ"),
    }
}

pub struct ToastStack<'a> {
    toasts: &'a [Toast],
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast]) -> Self {
        Self { toasts }
    }

    fn height_for(message: &str, width: u16) -> u16 {
        let text_width = width.saturating_sub(6).max(1) as usize;
        let lines = display_width(message).div_ceil(text_width).max(1);
        lines as u16 + 2
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 10 {
            return;
        }
        let x = area.x + area.width - width;
        let mut y = area.y;
        let bottom = area.y + area.height;

        // newest on top
        for toast in self.toasts.iter().rev().take(MAX_VISIBLE) {
            let height = Self::height_for(&toast.message, width);
            if y + height > bottom {
                break;
            }
            let rect = Rect::new(x, y, width, height);
            let (color, icon) = kind_color(toast.kind);
            clear_area(buf, rect);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(palette::POPUP_BG));
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(toast.message.clone(), styles::text_primary()),
            ]))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(rect, buf);
            y += height;
        }
    }
}
