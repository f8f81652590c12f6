//! Functions list and the new-function form

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph};
use ratatui::Frame;

use lunar_app::pagination::PaginationModel;
use lunar_app::templates::TEMPLATES;
use lunar_app::views::{CreateField, FunctionCreateView, FunctionsListView, Loadable};

use crate::theme::styles;
use crate::widgets::{
    Badge, Button, Card, CardVariant, CodeViewer, DataTable, HelpText, InputField, MessageCard,
    PaginationBar,
};

use super::render_loading;

pub(super) fn render_list(frame: &mut Frame, area: Rect, view: &FunctionsListView) {
    let list = match &view.functions {
        Loadable::Loading => return render_loading(frame, area, "functions"),
        Loadable::NotFound => {
            frame.render_widget(
                MessageCard::new(
                    Card::new("Functions").variant(CardVariant::Danger),
                    "Functions not found",
                ),
                area,
            );
            return;
        }
        Loadable::Loaded(list) => list,
    };

    if list.functions.is_empty() {
        frame.render_widget(
            MessageCard::new(
                Card::new("Functions"),
                "No functions yet. Create your first function to get started.",
            ),
            area,
        );
        return;
    }

    let subtitle = format!("{} functions", list.pagination.total);
    let inner = Card::new("Functions")
        .subtitle(&subtitle)
        .render_frame(area, frame.buffer_mut());
    let [table_area, pager_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let rows = list.functions.iter().map(|f| {
        vec![
            Cell::from(Span::styled(f.name.clone(), styles::text_bold())),
            match f.description_text() {
                Some(d) => Cell::from(Span::styled(d.to_string(), styles::text_secondary())),
                None => Cell::from(Span::styled("No description", styles::text_muted())),
            },
            Cell::from(Line::from(Badge::function_status(f.disabled).span())),
            Cell::from(Line::from(Badge::version(f.version_label()).span())),
        ]
    });
    let table = DataTable::new(
        vec!["Name", "Description", "Status", "Version"],
        vec![
            Constraint::Percentage(30),
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(8),
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

pub(super) fn render_create(frame: &mut Frame, area: Rect, view: &FunctionCreateView) {
    let [form_area, preview_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(area);

    let inner = Card::new("Create Function")
        .subtitle("Give it a name and pick a starter template")
        .render_frame(form_area, frame.buffer_mut());

    let error = |field: &str| view.field_error(field).map(HelpText::Error);
    let name = InputField::new("Name", &view.name)
        .focused(view.focus == CreateField::Name)
        .placeholder("my-function")
        .help(error("name"));
    let description = InputField::new("Description", &view.description)
        .focused(view.focus == CreateField::Description)
        .placeholder("What does this function do?")
        .help(error("description"));

    let [name_area, description_area, template_label, template_area, _, submit_area] =
        Layout::vertical([
            Constraint::Length(name.height()),
            Constraint::Length(description.height()),
            Constraint::Length(1),
            Constraint::Length(TEMPLATES.len() as u16),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(name, name_area);
    frame.render_widget(description, description_area);

    let template_focused = view.focus == CreateField::Template;
    frame.render_widget(
        Line::from(Span::styled(
            " Template",
            if template_focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        )),
        template_label,
    );
    let templates: Vec<Line> = TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let selected = i == view.template;
            let marker = if selected { "● " } else { "○ " };
            let name_style = if selected && template_focused {
                styles::focused_selected()
            } else if selected {
                styles::text_bold()
            } else {
                styles::text_secondary()
            };
            Line::from(vec![
                Span::styled(format!("  {marker}"), styles::accent()),
                Span::styled(t.name, name_style),
                Span::styled(format!("  {}", t.description), styles::text_muted()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(templates), template_area);

    let label = if view.submitting {
        "Creating..."
    } else {
        "Create Function"
    };
    frame.render_widget(
        Button::new(label)
            .focused(view.focus == CreateField::Submit)
            .disabled(view.submitting),
        submit_area,
    );

    let template = view.selected_template();
    let title = format!("{} Template", template.name);
    let code_area = Card::new(&title).render_frame(preview_area, frame.buffer_mut());
    frame.render_widget(CodeViewer::from_text(template.code), code_area);
}
