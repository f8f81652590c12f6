//! Per-function screens: the five tabs plus the version diff.
//!
//! Every screen shares the same chrome: function header, tab bar, content.
//! The chrome is only drawn once the function has loaded.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Wrap};
use ratatui::Frame;

use lunar_api::HttpMethod;
use lunar_app::api_reference::LUA_API_SECTIONS;
use lunar_app::env_editor::{EnvColumn, RowState};
use lunar_app::pagination::PaginationModel;
use lunar_app::route::FunctionTab;
use lunar_app::views::function_settings::SUPPORTED_METHODS;
use lunar_app::views::{
    FunctionCodeView, FunctionExecutionsView, FunctionSettingsView, FunctionTestView,
    FunctionVersionsView, GeneralField, Loadable, SettingsSection, TestField, VersionDiffView,
};
use lunar_core::{format_timestamp, Function, TimestampFormat};

use crate::layout;
use crate::theme::styles;
use crate::widgets::{
    ApiReference, Badge, BadgeVariant, Button, ButtonVariant, Card, CardVariant, CodeViewer, DataTable,
    DiffLegend, DiffViewer, FunctionHeader, FunctionTabs, HelpText, InputField, LogViewer,
    MessageCard, PaginationBar, TextAreaField,
};

use super::render_loading;

/// Draw header and tabs, returning the content area, or `None` when the
/// function is not available and a placeholder was drawn instead
fn chrome(
    frame: &mut Frame,
    area: Rect,
    function: &Loadable<Function>,
    tab: Option<FunctionTab>,
) -> Option<Rect> {
    let func = match function {
        Loadable::Loading => {
            render_loading(frame, area, "function");
            return None;
        }
        Loadable::NotFound => {
            frame.render_widget(
                MessageCard::new(
                    Card::new("Function").variant(CardVariant::Danger),
                    "Function not found",
                ),
                area,
            );
            return None;
        }
        Loadable::Loaded(func) => func,
    };
    let areas = layout::function_screen(area);
    frame.render_widget(FunctionHeader::new(func), areas.title);
    frame.render_widget(FunctionTabs::new(tab), areas.tabs);
    Some(areas.content)
}

// ─────────────────────────────────────────────────────────────────────────────
// Code
// ─────────────────────────────────────────────────────────────────────────────

const API_REFERENCE_WIDTH: u16 = 38;

pub(super) fn render_code(frame: &mut Frame, area: Rect, view: &FunctionCodeView) {
    let Some(content) = chrome(frame, area, &view.function, Some(FunctionTab::Code)) else {
        return;
    };
    let subtitle = match (view.saving, view.editing, view.edited_code().is_some()) {
        (true, _, _) => "Saving...",
        (false, true, true) => "Editing · unsaved changes",
        (false, true, false) => "Editing",
        (false, false, true) => "Unsaved changes · press Ctrl+S to save",
        (false, false, false) => "Press e to edit",
    };
    let [editor_area, reference_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(API_REFERENCE_WIDTH)])
            .spacing(1)
            .areas(content);
    let inner = Card::new("Code")
        .subtitle(subtitle)
        .focused(view.editing)
        .render_frame(editor_area, frame.buffer_mut());
    let mut viewer = CodeViewer::new(view.editor.lines());
    if view.editing {
        viewer = viewer.cursor(view.editor.cursor());
    } else {
        viewer = viewer.scroll(view.editor.cursor().0);
    }
    frame.render_widget(viewer, inner);

    let reference = Card::new("API Reference")
        .subtitle("Tab / [ ] to switch")
        .render_frame(reference_area, frame.buffer_mut());
    frame.render_widget(ApiReference::new(&LUA_API_SECTIONS, view.api_tab), reference);
}

// ─────────────────────────────────────────────────────────────────────────────
// Versions
// ─────────────────────────────────────────────────────────────────────────────

pub(super) fn render_versions(frame: &mut Frame, area: Rect, view: &FunctionVersionsView) {
    let Some(content) = chrome(frame, area, &view.function, Some(FunctionTab::Versions)) else {
        return;
    };
    let list = match &view.versions {
        Loadable::Loading => return render_loading(frame, content, "versions"),
        Loadable::NotFound => {
            frame.render_widget(
                MessageCard::new(Card::new("Versions"), "Versions not found"),
                content,
            );
            return;
        }
        Loadable::Loaded(list) => list,
    };

    let subtitle = format!(
        "Select two versions to compare ({}/2 selected)",
        view.checked.len()
    );
    let inner = Card::new("Version History")
        .subtitle(&subtitle)
        .render_frame(content, frame.buffer_mut());
    let [table_area, pager_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let rows = list.versions.iter().map(|v| {
        let checkbox = if view.is_checked(v.version) { "[x]" } else { "[ ]" };
        let active = view.is_active(v.version);
        let mut label = vec![Span::styled(format!("v{}", v.version), styles::text_bold())];
        if active {
            label.push(Span::raw(" "));
            label.push(Badge::new("ACTIVE", BadgeVariant::Success).span());
        }
        vec![
            Cell::from(Span::styled(checkbox, styles::accent())),
            Cell::from(Line::from(label)),
            Cell::from(Span::styled(
                format_timestamp(v.created_at, TimestampFormat::DateTime),
                styles::text_secondary(),
            )),
            if active {
                Cell::from("")
            } else {
                Cell::from(Span::styled("a: Activate", styles::text_muted()))
            },
        ]
    });
    let table = DataTable::new(
        vec!["", "Version", "Created", ""],
        vec![
            Constraint::Length(3),
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Fill(1),
        ],
    )
    .rows(rows)
    .selected(Some(view.selected));
    frame.render_widget(table, table_area);
    frame.render_widget(
        PaginationBar::new(PaginationModel::from(list.pagination)),
        pager_area,
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Executions
// ─────────────────────────────────────────────────────────────────────────────

pub(super) fn render_executions(frame: &mut Frame, area: Rect, view: &FunctionExecutionsView) {
    let Some(content) = chrome(frame, area, &view.function, Some(FunctionTab::Executions)) else {
        return;
    };
    let list = match &view.executions {
        Loadable::Loading => return render_loading(frame, content, "executions"),
        Loadable::NotFound => {
            frame.render_widget(
                MessageCard::new(Card::new("Executions"), "Executions not found"),
                content,
            );
            return;
        }
        Loadable::Loaded(list) => list,
    };
    if list.executions.is_empty() {
        frame.render_widget(
            MessageCard::new(
                Card::new("Executions"),
                "No executions yet. Test your function to see execution history.",
            ),
            content,
        );
        return;
    }

    let inner = Card::new("Executions").render_frame(content, frame.buffer_mut());
    let [table_area, pager_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    let rows = list.executions.iter().map(|e| {
        vec![
            Cell::from(Span::styled(e.short_id().to_string(), styles::text_primary())),
            Cell::from(Line::from(Badge::execution_status(e.status).span())),
            Cell::from(Span::styled(e.duration_label(), styles::text_secondary())),
            Cell::from(Span::styled(
                format_timestamp(e.created_at, TimestampFormat::DateTime),
                styles::text_secondary(),
            )),
        ]
    });
    let table = DataTable::new(
        vec!["Execution", "Status", "Duration", "Time"],
        vec![
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .rows(rows)
    .selected(Some(view.selected));
    frame.render_widget(table, table_area);
    frame.render_widget(
        PaginationBar::new(PaginationModel::from(list.pagination)),
        pager_area,
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

pub(super) fn render_settings(frame: &mut Frame, area: Rect, view: &FunctionSettingsView) {
    let Some(content) = chrome(frame, area, &view.function, Some(FunctionTab::Settings)) else {
        return;
    };
    let [nav_area, section_area] =
        Layout::horizontal([Constraint::Length(26), Constraint::Fill(1)])
            .spacing(1)
            .areas(content);

    let nav: Vec<Line> = SettingsSection::ALL
        .iter()
        .map(|s| {
            if *s == view.section {
                Line::from(Span::styled(format!("▌{}", s.label()), styles::focused_selected()))
            } else {
                Line::from(Span::styled(format!(" {}", s.label()), styles::text_secondary()))
            }
        })
        .collect();
    let nav_inner = Card::new("Settings").render_frame(nav_area, frame.buffer_mut());
    frame.render_widget(Paragraph::new(nav), nav_inner);

    match view.section {
        SettingsSection::General => render_general(frame, section_area, view),
        SettingsSection::Environment => render_env(frame, section_area, view),
        SettingsSection::Network => render_network(frame, section_area, view),
        SettingsSection::Status => render_status(frame, section_area, view),
        SettingsSection::Danger => render_danger(frame, section_area, view),
    }
}

fn render_general(frame: &mut Frame, area: Rect, view: &FunctionSettingsView) {
    let inner = Card::new("General")
        .subtitle("Basic information about your function")
        .focused(true)
        .render_frame(area, frame.buffer_mut());

    let error_for = |field: GeneralField| match &view.general_error {
        Some((f, message)) if *f == field => Some(HelpText::Error(message.as_str())),
        _ => None,
    };
    let name = InputField::new("Name", &view.name)
        .focused(view.field == GeneralField::Name)
        .help(error_for(GeneralField::Name));
    let description = InputField::new("Description", &view.description)
        .focused(view.field == GeneralField::Description)
        .placeholder("No description")
        .help(error_for(GeneralField::Description));
    let [name_area, description_area, _, button_area] = Layout::vertical([
        Constraint::Length(name.height()),
        Constraint::Length(description.height()),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);
    frame.render_widget(name, name_area);
    frame.render_widget(description, description_area);

    let changed = view.edited_name().is_some() || view.edited_description().is_some();
    let label = if view.saving { "Saving..." } else { "Save Changes (Ctrl+S)" };
    frame.render_widget(
        Button::new(label).disabled(!changed || view.saving),
        button_area,
    );
}

fn env_state_marker(state: RowState) -> Span<'static> {
    match state {
        RowState::Original => Span::raw("  "),
        RowState::Added => Span::styled("+ ", styles::status_green()),
        RowState::Modified => Span::styled("~ ", styles::status_yellow()),
        RowState::Removed => Span::styled("- ", styles::status_red()),
    }
}

fn render_env(frame: &mut Frame, area: Rect, view: &FunctionSettingsView) {
    let inner = Card::new("Environment Variables")
        .subtitle("Ctrl+N add · Ctrl+D remove · Enter switch column · Ctrl+S save")
        .focused(true)
        .render_frame(area, frame.buffer_mut());

    let (error_area, table_area) = match &view.env_error {
        Some(_) => {
            let [e, t] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
            (Some(e), t)
        }
        None => (None, inner),
    };
    if let (Some(error), Some(error_area)) = (&view.env_error, error_area) {
        frame.render_widget(
            Paragraph::new(Span::styled(error.clone(), styles::status_red()))
                .wrap(Wrap { trim: true }),
            error_area,
        );
    }

    if view.env.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No environment variables. Press Ctrl+N to add one.",
                styles::text_muted(),
            )),
            table_area,
        );
        return;
    }

    let rows = view.env.rows().iter().enumerate().map(|(i, row)| {
        let selected = i == view.env.selected;
        let removed = row.state == RowState::Removed;
        let cell = |text: String, column: EnvColumn| {
            let mut style = if selected && view.env.column == column && !removed {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            if removed {
                style = styles::text_muted().add_modifier(Modifier::CROSSED_OUT);
            }
            let text = if text.is_empty() { " ".to_string() } else { text };
            Cell::from(Span::styled(text, style))
        };
        vec![
            Cell::from(env_state_marker(row.state)),
            cell(row.key.display(), EnvColumn::Key),
            cell(row.value.display(), EnvColumn::Value),
        ]
    });
    let table = DataTable::new(
        vec!["", "Key", "Value"],
        vec![
            Constraint::Length(2),
            Constraint::Percentage(40),
            Constraint::Fill(1),
        ],
    )
    .rows(rows)
    .selected(Some(view.env.selected));
    frame.render_widget(table, table_area);
}

fn render_network(frame: &mut Frame, area: Rect, view: &FunctionSettingsView) {
    let inner = Card::new("Network")
        .subtitle("How to call this function over HTTP")
        .focused(true)
        .render_frame(area, frame.buffer_mut());
    let mut methods = vec![Span::styled("Supported methods  ", styles::text_secondary())];
    for method in SUPPORTED_METHODS {
        methods.push(Badge::new(method, BadgeVariant::Outline).span());
        methods.push(Span::raw(" "));
    }
    let lines = vec![
        Line::from(Span::styled("Invocation URL", styles::text_secondary())),
        Line::from(Span::styled(view.invocation_url(), styles::accent())),
        Line::default(),
        Line::from(methods),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status(frame: &mut Frame, area: Rect, view: &FunctionSettingsView) {
    let inner = Card::new("Function Status")
        .subtitle("Disabled functions reject invocations")
        .variant(CardVariant::Warning)
        .focused(true)
        .render_frame(area, frame.buffer_mut());
    let toggle = if view.enabled {
        Span::styled("[●] Enabled", styles::status_green())
    } else {
        Span::styled("[ ] Disabled", styles::status_red())
    };
    let mut lines = vec![Line::from(vec![
        toggle,
        Span::styled("   Space to toggle", styles::text_muted()),
    ])];
    if view.status_change().is_some() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Unsaved change · press Ctrl+S to apply",
            styles::status_yellow(),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_danger(frame: &mut Frame, area: Rect, view: &FunctionSettingsView) {
    let inner = Card::new("Danger Zone")
        .subtitle("Irreversible actions")
        .variant(CardVariant::Danger)
        .focused(true)
        .render_frame(area, frame.buffer_mut());
    let [text_area, _, button_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Deleting a function removes its versions, executions and logs.",
            styles::text_secondary(),
        ))
        .wrap(Wrap { trim: true }),
        text_area,
    );
    frame.render_widget(
        Button::new("Delete Function")
            .variant(ButtonVariant::Destructive)
            .focused(true)
            .disabled(view.saving),
        button_area,
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test
// ─────────────────────────────────────────────────────────────────────────────

pub(super) fn render_test(frame: &mut Frame, area: Rect, view: &FunctionTestView) {
    let Some(content) = chrome(frame, area, &view.function, Some(FunctionTab::Test)) else {
        return;
    };
    let [request_area, right_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(content);
    render_request(frame, request_area, view);

    let [response_area, example_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(12)]).areas(right_area);
    render_response(frame, response_area, view);

    let title = format!("Code Example · {}", view.language.label());
    let inner = Card::new(&title)
        .subtitle("Ctrl+E to switch language")
        .render_frame(example_area, frame.buffer_mut());
    let code = view.code_example();
    frame.render_widget(CodeViewer::from_text(&code), inner);
}

fn render_request(frame: &mut Frame, area: Rect, view: &FunctionTestView) {
    let inner = Card::new("Request").render_frame(area, frame.buffer_mut());
    let [method_area, query_area, url_area, headers_area, body_area, send_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

    let method_focused = view.focus == TestField::Method;
    let mut methods = vec![Span::styled(
        "Method ",
        if method_focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        },
    )];
    for method in HttpMethod::ALL {
        let style = if method == view.method && method_focused {
            styles::focused_selected()
        } else if method == view.method {
            styles::text_bold()
        } else {
            styles::text_muted()
        };
        methods.push(Span::styled(format!(" {} ", method.as_str()), style));
    }
    frame.render_widget(Line::from(methods), method_area);

    frame.render_widget(
        InputField::new("Query", &view.query)
            .focused(view.focus == TestField::Query)
            .placeholder("key=value&other=1"),
        query_area,
    );
    frame.render_widget(
        Line::from(vec![
            Span::styled(" URL ", styles::text_muted()),
            Span::styled(view.url(), styles::accent()),
        ]),
        url_area,
    );
    frame.render_widget(
        TextAreaField::new("Headers (JSON)", &view.headers)
            .focused(view.focus == TestField::Headers)
            .help(view.headers_error.as_deref().map(HelpText::Error)),
        headers_area,
    );
    let body_label = if view.method.has_body() {
        "Body"
    } else {
        "Body (not sent for this method)"
    };
    frame.render_widget(
        TextAreaField::new(body_label, &view.body).focused(view.focus == TestField::Body),
        body_area,
    );
    let label = if view.sending { "Sending..." } else { "Send Request" };
    frame.render_widget(
        Button::new(label)
            .focused(view.focus == TestField::Send)
            .disabled(view.sending),
        send_area,
    );
}

fn render_response(frame: &mut Frame, area: Rect, view: &FunctionTestView) {
    let inner = Card::new("Response").render_frame(area, frame.buffer_mut());
    if view.sending {
        return render_loading(frame, inner, "response");
    }
    let Some(response) = &view.response else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Send a request to see the response",
                styles::text_muted(),
            )),
            inner,
        );
        return;
    };

    let [status_area, body_area, logs_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .areas(inner);
    frame.render_widget(
        Line::from(vec![
            Badge::http_status(response.status).span(),
            Span::raw(" "),
            Badge::new(format!("{}ms", response.duration_ms), BadgeVariant::Outline).span(),
        ]),
        status_area,
    );
    let body = response.pretty_body();
    frame.render_widget(CodeViewer::from_text(&body), body_area);

    match &view.logs {
        None => {}
        Some(Loadable::Loading) => render_loading(frame, logs_area, "logs"),
        Some(Loadable::NotFound) => frame.render_widget(
            Paragraph::new(Span::styled("Logs not found", styles::text_muted())),
            logs_area,
        ),
        Some(Loadable::Loaded(list)) => {
            let logs_inner = Card::new("Logs").render_frame(logs_area, frame.buffer_mut());
            frame.render_widget(LogViewer::new(&list.logs), logs_inner);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Diff
// ─────────────────────────────────────────────────────────────────────────────

pub(super) fn render_diff(frame: &mut Frame, area: Rect, view: &VersionDiffView) {
    if view.function.is_not_found() || view.diff.is_not_found() {
        frame.render_widget(
            MessageCard::new(
                Card::new("Version Diff").variant(CardVariant::Danger),
                "Diff not found",
            ),
            area,
        );
        return;
    }
    let Some(content) = chrome(frame, area, &view.function, None) else {
        return;
    };
    let Some(diff) = view.diff.loaded() else {
        return render_loading(frame, content, "diff");
    };

    let subtitle = view.subtitle();
    let inner = Card::new("Version Diff")
        .subtitle(&subtitle)
        .render_frame(content, frame.buffer_mut());
    let [legend_area, _, diff_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);
    frame.render_widget(DiffLegend::new(diff), legend_area);
    frame.render_widget(DiffViewer::new(&diff.diff).scroll(view.scroll), diff_area);
}
