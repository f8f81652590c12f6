//! Main render/view function (View in TEA pattern)
//!
//! `view` is pure: it reads [`AppState`] and draws one frame. Each screen
//! has its own module; overlays (palette, confirm dialog, toasts) are drawn
//! last so they sit above the screen.

mod execution;
mod function;
mod functions;
mod login;
mod preview;


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use lunar_app::route::Route;
use lunar_app::views::View;
use lunar_app::AppState;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{CommandPalette, ConfirmDialog, KeyHints, MainHeader, ToastStack};

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let trail = breadcrumb(state);
    frame.render_widget(
        MainHeader::new(&trail).search_hint(state.route != Route::Login),
        areas.header,
    );

    let body = inset(areas.body);
    match &state.view {
        View::Login(v) => login::render(frame, body, v),
        View::FunctionsList(v) => functions::render_list(frame, body, v),
        View::FunctionCreate(v) => functions::render_create(frame, body, v),
        View::FunctionCode(v) => function::render_code(frame, body, v),
        View::FunctionVersions(v) => function::render_versions(frame, body, v),
        View::FunctionExecutions(v) => function::render_executions(frame, body, v),
        View::FunctionSettings(v) => function::render_settings(frame, body, v),
        View::FunctionTest(v) => function::render_test(frame, body, v),
        View::VersionDiff(v) => function::render_diff(frame, body, v),
        View::ExecutionDetail(v) => execution::render(frame, body, v),
        View::Preview(v) => preview::render(frame, body, v),
    }

    frame.render_widget(footer_hints(state), areas.footer);

    if state.palette.is_open() {
        frame.render_widget(CommandPalette::new(&state.palette), area);
    }
    if let Some(confirm) = &state.confirm {
        frame.render_widget(ConfirmDialog::new(confirm), area);
    }
    if !state.toasts.is_empty() {
        let toast_area = Rect {
            y: areas.body.y,
            height: areas.body.height,
            ..area
        };
        frame.render_widget(ToastStack::new(state.toasts.items()), toast_area);
    }
}

/// Route trail with the function id replaced by its name once loaded
fn breadcrumb(state: &AppState) -> Vec<String> {
    let mut trail = state.route.breadcrumb();
    if let (Some(func), Some(id)) = (state.current_function(), state.route.function_id()) {
        for crumb in trail.iter_mut().filter(|c| c.as_str() == id) {
            *crumb = func.name.clone();
        }
    }
    trail
}

/// One column of padding on each side of the body
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn footer_hints(state: &AppState) -> KeyHints {
    let hints = KeyHints::new();
    if state.confirm.is_some() {
        return hints.hint("y", "confirm").hint("n", "cancel");
    }
    if state.palette.is_open() {
        return hints.hint("Enter", "go").hint("Esc", "close");
    }
    let hints = match &state.view {
        View::Login(_) => hints.hint("Enter", "sign in").hint("Ctrl+C", "quit"),
        View::FunctionsList(_) => hints
            .hint("Enter", "open")
            .hint("n", "new")
            .hint("[ ]", "page")
            .hint("r", "reload"),
        View::FunctionCreate(_) => hints
            .hint("Tab", "next field")
            .hint("Ctrl+S", "create")
            .hint("Esc", "back"),
        View::FunctionCode(v) if v.editing => hints
            .hint("Esc", "stop editing")
            .hint("Ctrl+S", "save"),
        View::FunctionCode(_) => hints
            .hint("e", "edit")
            .hint("Ctrl+S", "save")
            .hint("Tab", "api ref"),
        View::FunctionVersions(_) => hints
            .hint("Space", "select")
            .hint("c", "compare")
            .hint("a", "activate"),
        View::FunctionExecutions(_) => hints.hint("Enter", "details").hint("[ ]", "page"),
        View::FunctionSettings(_) => hints
            .hint("Tab", "section")
            .hint("Ctrl+S", "save"),
        View::FunctionTest(_) => hints
            .hint("Tab", "field")
            .hint("Ctrl+S", "send")
            .hint("Ctrl+E", "language"),
        View::VersionDiff(_) => hints.hint("↑↓", "scroll"),
        View::ExecutionDetail(_) => hints.hint("↑↓", "scroll").hint("[ ]", "log page"),
        View::Preview(_) => hints.hint("↑↓", "component").hint("t", "toasts"),
    };
    if state.route == Route::Login {
        return hints;
    }
    hints
        .hint("Ctrl+K", "search")
        .hint("Esc", "back")
        .hint("q", "quit")
}

/// Centered muted line for loading states
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, what: &str) {
    let y = area.y + area.height / 2;
    frame.render_widget(
        Paragraph::new(Span::styled(format!("Loading {what}..."), styles::text_muted()))
            .centered(),
        Rect { y, height: 1, ..area },
    );
}
