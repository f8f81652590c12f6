//! Side-numbered unified diff.
//!
//! One row per [`DiffLine`], drawn in the order given. Added rows leave the
//! old-number column blank and removed rows leave the new-number column
//! blank; nothing is collapsed or reordered.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use lunar_core::{DiffLine, LineType, VersionDiff};

use crate::theme::{palette, styles};

/// Width of each line-number column
const NUMBER_WIDTH: usize = 4;

fn number_cell(n: Option<u32>) -> String {
    match n {
        Some(n) => format!("{n:>NUMBER_WIDTH$}"),
        None => " ".repeat(NUMBER_WIDTH),
    }
}

fn row_style(line_type: LineType) -> Style {
    match line_type {
        LineType::Added => Style::default()
            .fg(palette::STATUS_GREEN)
            .bg(palette::DIFF_ADDED_BG),
        LineType::Removed => Style::default()
            .fg(palette::STATUS_RED)
            .bg(palette::DIFF_REMOVED_BG),
        LineType::Unchanged => styles::text_primary(),
    }
}

/// Cells of one diff row: old number, new number, symbol, content
pub fn diff_row(line: &DiffLine) -> Line<'static> {
    let style = row_style(line.line_type);
    Line::from(vec![
        Span::styled(number_cell(line.old_number()), styles::text_muted()),
        Span::raw(" "),
        Span::styled(number_cell(line.new_number()), styles::text_muted()),
        Span::raw(" "),
        Span::styled(format!("{} ", line.line_type.symbol()), style),
        Span::styled(line.display_content().to_string(), style),
    ])
    .style(match line.line_type {
        LineType::Unchanged => Style::default(),
        other => Style::default().bg(row_style(other).bg.unwrap_or(palette::DEEPEST_BG)),
    })
}

pub struct DiffViewer<'a> {
    lines: &'a [DiffLine],
    scroll: usize,
}

impl<'a> DiffViewer<'a> {
    pub fn new(lines: &'a [DiffLine]) -> Self {
        Self { lines, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for DiffViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let offset = self.scroll.min(self.lines.len().saturating_sub(height));
        for (row, line) in self.lines.iter().skip(offset).take(height).enumerate() {
            let y = area.y + row as u16;
            diff_row(line).render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

/// `- Version {old}   + Version {new}   +adds -dels`
pub struct DiffLegend<'a> {
    diff: &'a VersionDiff,
}

impl<'a> DiffLegend<'a> {
    pub fn new(diff: &'a VersionDiff) -> Self {
        Self { diff }
    }

    pub fn line(&self) -> Line<'static> {
        let (additions, deletions) = self.diff.stats();
        Line::from(vec![
            Span::styled(
                format!("- Version {}", self.diff.old_version),
                styles::status_red(),
            ),
            Span::raw("   "),
            Span::styled(
                format!("+ Version {}", self.diff.new_version),
                styles::status_green(),
            ),
            Span::raw("   "),
            Span::styled(format!("+{additions}"), styles::status_green()),
            Span::raw(" "),
            Span::styled(format!("-{deletions}"), styles::status_red()),
        ])
    }
}

impl Widget for DiffLegend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
