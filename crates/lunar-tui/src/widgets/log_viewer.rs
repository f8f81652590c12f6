//! Execution log lines: time, level badge, message

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use lunar_core::{format_timestamp, ExecutionLog, LogLevel, TimestampFormat};

use crate::theme::{palette, styles};

fn level_style(level: LogLevel) -> Style {
    let color = match level {
        LogLevel::Debug => palette::LOG_DEBUG,
        LogLevel::Info => palette::LOG_INFO,
        LogLevel::Warn => palette::LOG_WARN,
        LogLevel::Error => palette::LOG_ERROR,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn log_line(log: &ExecutionLog) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format_timestamp(log.created_at, TimestampFormat::Time),
            styles::text_muted(),
        ),
        Span::raw(" "),
        Span::styled(format!("{:<5}", log.level.label()), level_style(log.level)),
        Span::raw(" "),
        Span::styled(log.message.clone(), styles::text_primary()),
    ])
}

pub struct LogViewer<'a> {
    logs: &'a [ExecutionLog],
    scroll: usize,
}

impl<'a> LogViewer<'a> {
    pub fn new(logs: &'a [ExecutionLog]) -> Self {
        Self { logs, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for LogViewer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.logs.is_empty() {
            Paragraph::new(Span::styled("No logs available", styles::text_muted()))
                .render(area, buf);
            return;
        }
        let offset = self
            .scroll
            .min(self.logs.len().saturating_sub(area.height as usize));
        let lines: Vec<Line> = self.logs.iter().skip(offset).map(log_line).collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
