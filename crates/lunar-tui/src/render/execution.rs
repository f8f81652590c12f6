//! Execution detail: header, error report, input event, logs

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use lunar_app::pagination::PaginationModel;
use lunar_app::views::{ExecutionDetailView, Loadable};
use lunar_core::{format_timestamp, ErrorReport, TimestampFormat};

use crate::theme::styles;
use crate::widgets::{
    Badge, BadgeVariant, Card, CardVariant, CodeViewer, LogViewer, MessageCard, PaginationBar,
};

use super::render_loading;

/// Tallest the input event card grows before it scrolls off
const MAX_EVENT_ROWS: u16 = 10;

pub(super) fn render(frame: &mut Frame, area: Rect, view: &ExecutionDetailView) {
    let exec = match &view.execution {
        Loadable::Loading => return render_loading(frame, area, "execution"),
        Loadable::NotFound => {
            frame.render_widget(
                MessageCard::new(
                    Card::new("Execution").variant(CardVariant::Danger),
                    "Execution not found",
                ),
                area,
            );
            return;
        }
        Loadable::Loaded(exec) => exec,
    };

    let report = view.error_report();
    let event = exec.pretty_event();
    let error_rows = report.as_ref().map(error_height).unwrap_or(0);
    let event_rows = event
        .as_deref()
        .map(|e| (e.lines().count() as u16 + 2).min(MAX_EVENT_ROWS))
        .unwrap_or(3);

    let [header_area, error_area, event_area, logs_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(error_rows),
        Constraint::Length(event_rows),
        Constraint::Min(3),
    ])
    .areas(area);

    let function_name = view
        .function
        .as_ref()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| exec.function_id.clone());
    let header = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(function_name, styles::text_bold()),
            Span::styled(format!("  exec: {}", exec.short_id()), styles::text_muted()),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Badge::execution_status(exec.status).span(),
            Span::raw(" "),
            Badge::new(exec.duration_label(), BadgeVariant::Outline).span(),
            Span::styled(
                format!("  {}", format_timestamp(exec.created_at, TimestampFormat::DateTime)),
                styles::text_secondary(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), header_area);

    if let Some(report) = &report {
        render_error(frame, error_area, report);
    }

    let event_inner = Card::new("Input Event").render_frame(event_area, frame.buffer_mut());
    match &event {
        Some(json) => frame.render_widget(CodeViewer::from_text(json), event_inner),
        None => frame.render_widget(
            Paragraph::new(Span::styled("No input event", styles::text_muted())),
            event_inner,
        ),
    }

    render_logs(frame, logs_area, view);
}

/// Card rows: borders, description, snippet, tip and gaps between them
fn error_height(report: &ErrorReport) -> u16 {
    let mut rows = 2;
    if report.description.is_some() {
        rows += 2;
    }
    if let Some(code) = &report.code {
        rows += code.lines().count() as u16 + 1;
    }
    if report.tip.is_some() {
        rows += 1;
    }
    rows
}

fn render_error(frame: &mut Frame, area: Rect, report: &ErrorReport) {
    let inner = Card::new("Error")
        .variant(CardVariant::Danger)
        .render_frame(area, frame.buffer_mut());
    let mut lines = Vec::new();
    if let Some(description) = &report.description {
        lines.push(Line::from(Span::styled(description.clone(), styles::status_red())));
        lines.push(Line::default());
    }
    if let Some(code) = &report.code {
        for line in code.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), styles::text_primary())));
        }
        lines.push(Line::default());
    }
    if let Some(tip) = &report.tip {
        lines.push(Line::from(Span::styled(tip.clone(), styles::status_yellow())));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_logs(frame: &mut Frame, area: Rect, view: &ExecutionDetailView) {
    let inner = Card::new("Logs").render_frame(area, frame.buffer_mut());
    let list = match &view.logs {
        Loadable::Loading => return render_loading(frame, inner, "logs"),
        Loadable::NotFound => {
            frame.render_widget(
                Paragraph::new(Span::styled("Logs not found", styles::text_muted())),
                inner,
            );
            return;
        }
        Loadable::Loaded(list) => list,
    };
    if view.show_log_pagination() {
        let [log_area, pager_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        frame.render_widget(LogViewer::new(&list.logs).scroll(view.scroll), log_area);
        frame.render_widget(
            PaginationBar::new(PaginationModel::from(list.pagination)),
            pager_area,
        );
    } else {
        frame.render_widget(LogViewer::new(&list.logs).scroll(view.scroll), inner);
    }
}
