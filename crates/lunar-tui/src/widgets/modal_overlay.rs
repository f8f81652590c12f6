//! Helpers shared by the palette, confirm dialog and toasts

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Rect of `width`x`height` near the top of `area`, horizontally centered
pub fn top_centered_rect(width: u16, height: u16, top: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let y = area.y + top.min(area.height.saturating_sub(1));
    let h = height.min(area.y + area.height - y);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` so a modal stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
