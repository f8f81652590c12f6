//! Selectable data table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::theme::styles;

pub struct DataTable<'a> {
    header: Vec<&'a str>,
    rows: Vec<Row<'a>>,
    widths: Vec<Constraint>,
    selected: Option<usize>,
}

impl<'a> DataTable<'a> {
    pub fn new(header: Vec<&'a str>, widths: Vec<Constraint>) -> Self {
        Self {
            header,
            rows: Vec::new(),
            widths,
            selected: None,
        }
    }

    pub fn row(mut self, cells: Vec<Cell<'a>>) -> Self {
        self.rows.push(Row::new(cells));
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<Cell<'a>>>) -> Self {
        self.rows.extend(rows.into_iter().map(Row::new));
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for DataTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(
            self.header
                .into_iter()
                .map(|h| Cell::from(Line::styled(h, styles::text_muted()))),
        )
        .bottom_margin(0);

        let table = Table::new(self.rows, self.widths)
            .header(header)
            .column_spacing(2)
            .row_highlight_style(styles::selected_row())
            .highlight_symbol("▌")
            .style(Style::default());

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
