//! Component gallery rendered from static sample data

use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use lunar_app::api_reference::LUA_API_SECTIONS;
use lunar_app::pagination::PaginationModel;
use lunar_app::text_input::{TextArea, TextInput};
use lunar_app::toast::{ToastKind, Toasts};
use lunar_app::views::preview::{sample_diff, sample_logs};
use lunar_app::views::{PreviewComponent, PreviewView};

use crate::theme::styles;
use crate::widgets::{
    ApiReference, Badge, BadgeVariant, Button, ButtonVariant, Card, CardVariant, DiffLegend, DiffViewer,
    HelpText, IdPill, InputField, LogViewer, MessageCard, PaginationBar, TextAreaField,
    ToastStack,
};

pub(super) fn render(frame: &mut Frame, area: Rect, view: &PreviewView) {
    let [nav_area, content_area] =
        Layout::horizontal([Constraint::Length(20), Constraint::Fill(1)])
            .spacing(1)
            .areas(area);

    let current = view.current();
    let nav: Vec<Line> = PreviewComponent::ALL
        .iter()
        .map(|c| {
            if *c == current {
                Line::from(Span::styled(format!("▌{}", c.label()), styles::focused_selected()))
            } else {
                Line::from(Span::styled(format!(" {}", c.label()), styles::text_secondary()))
            }
        })
        .collect();
    let nav_inner = Card::new("Components").render_frame(nav_area, frame.buffer_mut());
    frame.render_widget(Paragraph::new(nav), nav_inner);

    let inner = Card::new(current.label())
        .focused(true)
        .render_frame(content_area, frame.buffer_mut());
    match current {
        PreviewComponent::Badges => render_badges(frame, inner),
        PreviewComponent::Buttons => render_buttons(frame, inner),
        PreviewComponent::Cards => render_cards(frame, inner),
        PreviewComponent::Pagination => render_pagination(frame, inner),
        PreviewComponent::DiffViewer => render_diff(frame, inner),
        PreviewComponent::Toasts => render_toasts(frame, inner),
        PreviewComponent::LogViewer => {
            let logs = sample_logs();
            frame.render_widget(LogViewer::new(&logs), inner);
        }
        PreviewComponent::Forms => render_forms(frame, inner),
        PreviewComponent::ApiReference => {
            frame.render_widget(ApiReference::new(&LUA_API_SECTIONS, 0), inner)
        }
    }
}

fn render_badges(frame: &mut Frame, area: Rect) {
    let mut variants = Vec::new();
    for variant in BadgeVariant::ALL {
        variants.push(Badge::new(variant.name(), variant).span());
        variants.push(Span::raw(" "));
    }
    let lines = vec![
        Line::from(Span::styled("Variants", styles::text_secondary())),
        Line::from(variants),
        Line::default(),
        Line::from(Span::styled("Status", styles::text_secondary())),
        Line::from(vec![
            Badge::function_status(false).span(),
            Span::raw(" "),
            Badge::function_status(true).span(),
            Span::raw(" "),
            Badge::version("v12").span(),
        ]),
        Line::default(),
        Line::from(Span::styled("ID pill", styles::text_secondary())),
        Line::from(IdPill::new("fn_8c1d2e3f4a5b6c7d8e9f").span()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let buttons = [
        Button::new("Primary"),
        Button::new("Secondary").variant(ButtonVariant::Secondary),
        Button::new("Destructive").variant(ButtonVariant::Destructive),
        Button::new("Focused").focused(true),
        Button::new("Disabled").disabled(true),
    ];
    let mut spans = Vec::new();
    for button in &buttons {
        spans.push(button.span());
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(frame: &mut Frame, area: Rect) {
    let [a, b, c] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
    ])
    .areas(area);
    frame.render_widget(MessageCard::new(Card::new("Default"), "A plain card"), a);
    frame.render_widget(
        MessageCard::new(
            Card::new("Warning").variant(CardVariant::Warning),
            "Something needs attention",
        ),
        b,
    );
    frame.render_widget(
        MessageCard::new(
            Card::new("Danger").variant(CardVariant::Danger),
            "This action cannot be undone",
        ),
        c,
    );
}

fn render_pagination(frame: &mut Frame, area: Rect) {
    let [a, _, b, _, c] = Layout::vertical([Constraint::Length(1); 5]).areas(area);
    frame.render_widget(PaginationBar::new(PaginationModel::new(25, 20, 0)), a);
    frame.render_widget(PaginationBar::new(PaginationModel::new(95, 10, 40)), b);
    frame.render_widget(
        Line::from(Span::styled(
            "(an empty list renders no pagination bar)",
            styles::text_muted(),
        )),
        c,
    );
}

fn render_diff(frame: &mut Frame, area: Rect) {
    let diff = sample_diff();
    let [legend_area, _, diff_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);
    frame.render_widget(DiffLegend::new(&diff), legend_area);
    frame.render_widget(DiffViewer::new(&diff.diff), diff_area);
}

fn render_toasts(frame: &mut Frame, area: Rect) {
    let [hint_area, stack_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);
    frame.render_widget(
        Line::from(Span::styled(
            "Press t to raise live toasts. Samples:",
            styles::text_secondary(),
        )),
        hint_area,
    );
    let mut toasts = Toasts::default();
    let now = Instant::now();
    toasts.show("Function created successfully", ToastKind::Success, now);
    toasts.show("Failed to save code: network error", ToastKind::Error, now);
    toasts.show("No changes to save", ToastKind::Info, now);
    frame.render_widget(ToastStack::new(toasts.items()), stack_area);
}

fn render_forms(frame: &mut Frame, area: Rect) {
    let plain = TextInput::new("hello-world");
    let mut masked = TextInput::masked();
    masked.set_value("sk_live_123");
    let empty = TextInput::default();
    let code = TextArea::new("function handler(ctx, event)\n  return { statusCode = 200 }\nend");

    let name = InputField::new("Name", &plain)
        .help(Some(HelpText::Normal("Lowercase letters, digits and dashes")));
    let secret = InputField::new("API Key", &masked);
    let invalid = InputField::new("Description", &empty)
        .focused(true)
        .help(Some(HelpText::Error("Description is required")));
    let [a, b, c, d] = Layout::vertical([
        Constraint::Length(name.height()),
        Constraint::Length(secret.height()),
        Constraint::Length(invalid.height()),
        Constraint::Min(3),
    ])
    .areas(area);
    frame.render_widget(name, a);
    frame.render_widget(secret, b);
    frame.render_widget(invalid, c);
    frame.render_widget(TextAreaField::new("Code", &code), d);
}
