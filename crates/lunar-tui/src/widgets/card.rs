//! Bordered section with a title, optional subtitle and tone

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::theme::{palette, styles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Danger,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Card<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    variant: CardVariant,
    focused: bool,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            subtitle: None,
            variant: CardVariant::Default,
            focused: false,
        }
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'a> {
        let color = match self.variant {
            CardVariant::Danger => Some(palette::STATUS_RED),
            CardVariant::Warning => Some(palette::STATUS_YELLOW),
            CardVariant::Default => None,
        };
        let mut border = if self.focused {
            styles::border_active()
        } else {
            styles::border_inactive()
        };
        let mut title = styles::text_bold();
        if let Some(color) = color {
            border = border.fg(color);
            title = title.fg(color);
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                title.add_modifier(Modifier::BOLD),
            )))
    }

    /// Draw the frame and subtitle, returning the area left for content
    pub fn render_frame(self, area: Rect, buf: &mut Buffer) -> Rect {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);
        match self.subtitle {
            Some(subtitle) if inner.height > 1 => {
                Line::from(Span::styled(subtitle.to_string(), styles::text_muted()))
                    .render(Rect { height: 1, ..inner }, buf);
                Rect {
                    y: inner.y + 2.min(inner.height),
                    height: inner.height.saturating_sub(2),
                    ..inner
                }
            }
            _ => inner,
        }
    }
}

/// Card holding a single message, used for empty and "not found" states
pub struct MessageCard<'a> {
    card: Card<'a>,
    message: String,
}

impl<'a> MessageCard<'a> {
    pub fn new(card: Card<'a>, message: impl Into<String>) -> Self {
        Self {
            card,
            message: message.into(),
        }
    }
}

impl Widget for MessageCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.card.render_frame(area, buf);
        Paragraph::new(Span::styled(self.message, styles::text_secondary()))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
