//! Form pieces: labelled inputs, text areas, help text and buttons

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use lunar_app::text_input::{TextArea, TextInput};

use crate::theme::{palette, styles};

use super::code_viewer::CodeViewer;

/// Help line under a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpText<'a> {
    Normal(&'a str),
    Error(&'a str),
}

impl HelpText<'_> {
    fn span(&self) -> Span<'static> {
        match self {
            HelpText::Normal(text) => Span::styled(text.to_string(), styles::text_muted()),
            HelpText::Error(text) => Span::styled(text.to_string(), styles::status_red()),
        }
    }
}

fn field_block(label: &str, focused: bool, error: bool) -> Block<'static> {
    let border = if error {
        styles::status_red()
    } else if focused {
        styles::border_active()
    } else {
        styles::border_inactive()
    };
    let title = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {label} "), title))
}

/// Single-line input in a bordered box, 3 rows plus an optional help row
pub struct InputField<'a> {
    label: &'a str,
    input: &'a TextInput,
    focused: bool,
    placeholder: Option<&'a str>,
    help: Option<HelpText<'a>>,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, input: &'a TextInput) -> Self {
        Self {
            label,
            input,
            focused: false,
            placeholder: None,
            help: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn help(mut self, help: Option<HelpText<'a>>) -> Self {
        self.help = help;
        self
    }

    /// Rows needed: the box plus one for help text when present
    pub fn height(&self) -> u16 {
        3 + u16::from(self.help.is_some())
    }

    fn content_line(&self) -> Line<'static> {
        if self.input.is_empty() && !self.focused {
            if let Some(placeholder) = self.placeholder {
                return Line::from(Span::styled(placeholder.to_string(), styles::text_muted()));
            }
        }
        let display = self.input.display();
        if !self.focused {
            return Line::from(Span::styled(display, styles::text_primary()));
        }
        let chars: Vec<char> = display.chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".into());
        let after: String = chars.iter().skip(cursor + 1).collect();
        Line::from(vec![
            Span::styled(before, styles::text_primary()),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(after, styles::text_primary()),
        ])
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is_error = matches!(self.help, Some(HelpText::Error(_)));
        let box_area = Rect {
            height: 3.min(area.height),
            ..area
        };
        let block = field_block(self.label, self.focused, is_error);
        let inner = block.inner(box_area);
        block.render(box_area, buf);
        self.content_line().render(inner, buf);

        if let Some(help) = &self.help {
            if area.height > 3 {
                Line::from(vec![Span::raw(" "), help.span()])
                    .render(Rect::new(area.x, area.y + 3, area.width, 1), buf);
            }
        }
    }
}

/// Multi-line input drawn with line numbers
pub struct TextAreaField<'a> {
    label: &'a str,
    area: &'a TextArea,
    focused: bool,
    help: Option<HelpText<'a>>,
}

impl<'a> TextAreaField<'a> {
    pub fn new(label: &'a str, area: &'a TextArea) -> Self {
        Self {
            label,
            area,
            focused: false,
            help: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn help(mut self, help: Option<HelpText<'a>>) -> Self {
        self.help = help;
        self
    }
}

impl Widget for TextAreaField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let is_error = matches!(self.help, Some(HelpText::Error(_)));
        let help_rows = u16::from(self.help.is_some() && area.height > 3);
        let box_area = Rect {
            height: area.height - help_rows,
            ..area
        };
        let block = field_block(self.label, self.focused, is_error);
        let inner = block.inner(box_area);
        block.render(box_area, buf);

        let mut viewer = CodeViewer::new(self.area.lines());
        if self.focused {
            viewer = viewer.cursor(self.area.cursor());
        }
        viewer.render(inner, buf);

        if let (Some(help), 1) = (&self.help, help_rows) {
            Line::from(vec![Span::raw(" "), help.span()]).render(
                Rect::new(area.x, area.y + area.height - 1, area.width, 1),
                buf,
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    focused: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            focused: false,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn span(&self) -> Span<'static> {
        let style = if self.disabled {
            Style::default().fg(palette::TEXT_MUTED).bg(palette::SELECTED_BG)
        } else {
            let bg = match self.variant {
                ButtonVariant::Primary => palette::ACCENT,
                ButtonVariant::Secondary => palette::TEXT_SECONDARY,
                ButtonVariant::Destructive => palette::STATUS_RED,
            };
            let style = Style::default()
                .fg(palette::CONTRAST_FG)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            if self.focused {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            }
        };
        let marker = if self.focused && !self.disabled { "▸" } else { " " };
        Span::styled(format!("{marker}{} ", self.label), style)
    }

    pub fn width(&self) -> u16 {
        self.span().width() as u16
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.span())).render(area, buf);
    }
}
